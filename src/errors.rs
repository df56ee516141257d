/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    error::Error,
    fmt::Display
};

///Encoding/serialization errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
    ///Failure to serialize.
    EncodingError,
    ///Failure to deserialize.
    DecodingError,

} impl Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::EncodingError => "Encoding error.",
            Self::DecodingError => "Decoding error."
        })
    }

} impl Error for SerializationError {}

///Ring signature errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    ///The signature is invalid.
    ///
    ///This is returned for every verification or recovery failure,
    ///whatever the underlying cause.
    Invalid,
    ///The given parameters are inconsistent with the ring shape,
    ///or the ring shape itself is unsupported.
    Malformed,
    ///A private key's public key was not found in its ring.
    KeyNotInRing,

} impl Display for SignatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::Invalid => "This signature is invalid.",
            Self::Malformed => "Malformed signature or parameters.",
            Self::KeyNotInRing => "Key is not in ring.",
        })
    }

} impl Error for SignatureError {}
