// Copyright (c) 2026 xmpp-stanza contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Provides an error type for this crate.

use std::io;
use std::string::FromUtf8Error;

use core::{error::Error as StdError, fmt};

/// Our main error type.
#[derive(Debug)]
pub enum Error {
    /// I/O error reported by the underlying XML writer.
    Io(io::Error),

    /// The assembled document was not valid UTF-8.
    Utf8(FromUtf8Error),

    /// A name or some character data isn’t allowed by the XML grammar.
    InvalidXml(rxml_validation::Error),

    /// The same attribute was emitted twice on one element.
    DuplicateAttribute(String),

    /// An attribute was emitted while no start tag was open for it.
    NoOpenElement,

    /// An end tag was emitted without a matching start tag.
    UnbalancedEnd,

    /// The document was finished while this element was still open.
    UnclosedElement(String),

    /// An element name which doesn't designate any known stanza kind.
    UnknownKind(String),
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Utf8(e) => Some(e),
            Error::InvalidXml(e) => Some(e),
            Error::DuplicateAttribute(_) => None,
            Error::NoOpenElement => None,
            Error::UnbalancedEnd => None,
            Error::UnclosedElement(_) => None,
            Error::UnknownKind(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => write!(fmt, "I/O error: {}", e),
            Error::Utf8(e) => write!(fmt, "UTF-8 error: {}", e),
            Error::InvalidXml(e) => write!(fmt, "invalid XML: {}", e),
            Error::DuplicateAttribute(name) => {
                write!(fmt, "the attribute {} is present twice", name)
            }
            Error::NoOpenElement => write!(fmt, "no start tag open for this attribute"),
            Error::UnbalancedEnd => write!(fmt, "end tag without a matching start tag"),
            Error::UnclosedElement(name) => {
                write!(fmt, "the element <{}/> was never closed", name)
            }
            Error::UnknownKind(name) => write!(fmt, "unknown stanza kind: {}", name),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<FromUtf8Error> for Error {
    fn from(err: FromUtf8Error) -> Error {
        Error::Utf8(err)
    }
}

impl From<rxml_validation::Error> for Error {
    fn from(err: rxml_validation::Error) -> Error {
        Error::InvalidXml(err)
    }
}

/// Our simplified Result type.
pub type Result<T> = ::core::result::Result<T, Error>;
