// Copyright (c) 2026 xmpp-stanza contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The contract every stanza fulfills to get serialised, and the kinds of
//! stanzas there are.

use core::fmt;
use core::str::FromStr;

use minidom::Element;

use crate::attrs::Attrs;
use crate::builder::{Builder, XML_DECLARATION};
use crate::error::{Error, Result};
use crate::types;

/// The three kinds of stanzas exchanged on a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PacketKind {
    /// A `<presence/>` stanza, broadcasting availability.
    Presence,

    /// A `<message/>` stanza, pushing information to another entity.
    Message,

    /// An `<iq/>` stanza, a request or a response to one.
    Iq,
}

impl PacketKind {
    /// Every kind.
    pub const ALL: [PacketKind; 3] = [PacketKind::Presence, PacketKind::Message, PacketKind::Iq];

    /// Name of the element carrying this kind of stanza.
    pub fn name(self) -> &'static str {
        match self {
            PacketKind::Presence => "presence",
            PacketKind::Message => "message",
            PacketKind::Iq => "iq",
        }
    }

    /// The kind of stanza an element with this name carries, if any.
    pub fn from_name(name: &str) -> Option<PacketKind> {
        Some(match name {
            "presence" => PacketKind::Presence,
            "message" => PacketKind::Message,
            "iq" => PacketKind::Iq,
            _ => return None,
        })
    }

    /// The kind of stanza this element is, going by its name only.
    pub fn of(elem: &Element) -> Option<PacketKind> {
        PacketKind::from_name(elem.name())
    }

    /// Values the `type` attribute of this kind of stanza may take.
    pub fn permitted_types(self) -> &'static [&'static str] {
        match self {
            PacketKind::Presence => types::presence::ALL,
            PacketKind::Message => types::message::ALL,
            PacketKind::Iq => types::iq::ALL,
        }
    }

    /// Whether this kind of stanza may have this `type`, an empty one
    /// standing for the absence of the attribute.
    pub fn is_permitted_type(self, type_: &str) -> bool {
        type_.is_empty() || self.permitted_types().contains(&type_)
    }

    /// What an absent `type` is treated as, for the kinds which define it.
    pub fn default_type(self) -> Option<&'static str> {
        match self {
            PacketKind::Message => Some(types::message::DEFAULT),
            PacketKind::Presence | PacketKind::Iq => None,
        }
    }
}

impl fmt::Display for PacketKind {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.name())
    }
}

impl FromStr for PacketKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<PacketKind> {
        PacketKind::from_name(s).ok_or_else(|| Error::UnknownKind(s.to_owned()))
    }
}

/// Should be implemented on every stanza which can be sent on a stream.
pub trait Packet {
    /// Name of the element this stanza is serialised as.
    fn name(&self) -> &str;

    /// Write this stanza, its attributes and its children into `builder`,
    /// using [`Self::name`] as the element name.
    fn serialize_into(&self, builder: &mut Builder) -> Result<()>;

    /// Serialise this stanza as a standalone fragment, indented by two
    /// spaces, without any XML declaration nor leading line break, ready to
    /// be written on a stream.
    fn render(&self) -> Result<String> {
        let mut builder = Builder::new();
        self.serialize_into(&mut builder)?;
        let document = builder.finish()?;
        let fragment = strip_prologue(&document);
        log::trace!("Rendered <{}/>: {}", self.name(), fragment);
        Ok(fragment.to_owned())
    }
}

fn strip_prologue(document: &str) -> &str {
    document
        .strip_prefix(XML_DECLARATION)
        .unwrap_or(document)
        .trim_start_matches(['\n', '\r'])
}

/// A [`Packet`] built around a set of [`Attrs`].
///
/// The provided methods forward to the embedded attributes.
pub trait Stanza: Packet {
    /// The kind of this stanza.
    fn kind(&self) -> PacketKind;

    /// The shared attributes of this stanza.
    fn attrs(&self) -> &Attrs;

    /// The shared attributes of this stanza, for modification.
    fn attrs_mut(&mut self) -> &mut Attrs;

    /// The `type` of this stanza, empty if unspecified.
    fn type_(&self) -> &str {
        &self.attrs().type_
    }

    /// The identifier of this stanza, empty if unspecified.
    fn id(&self) -> &str {
        &self.attrs().id
    }

    /// The sender of this stanza, empty if unspecified.
    fn from(&self) -> &str {
        &self.attrs().from
    }

    /// The recipient of this stanza, empty if unspecified.
    fn to(&self) -> &str {
        &self.attrs().to
    }

    /// The language of this stanza, empty if unspecified.
    fn lang(&self) -> &str {
        &self.attrs().lang
    }

    /// The namespace this stanza was read from.
    fn xmlns(&self) -> &str {
        self.attrs().xmlns()
    }

    /// Whether the `type` of this stanza is one its kind permits.
    fn is_permitted_type(&self) -> bool {
        self.kind().is_permitted_type(self.type_())
    }
}
