// Copyright (c) 2026 xmpp-stanza contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The addressing and routing attributes shared by every stanza.

use std::collections::BTreeMap;

use minidom::Element;

use crate::builder::Builder;
use crate::error::Result;

/// Attributes common to `<presence/>`, `<message/>` and `<iq/>`.
///
/// An empty string means the attribute wasn’t provided, in which case it
/// won’t be exported either.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Attrs {
    /// The type of this stanza, its meaning depends on the stanza kind.
    pub type_: String,

    /// The identifier, unique on this stream, of this stanza.
    pub id: String,

    /// The sender of this stanza.
    pub from: String,

    /// The recipient of this stanza.
    pub to: String,

    /// The language of the human-readable content of this stanza.
    pub lang: String,

    xmlns: String,
}

impl Attrs {
    /// Create an empty set of attributes, without any namespace.
    pub fn new() -> Attrs {
        Attrs::default()
    }

    /// Create a set of attributes read from this element.
    pub fn from_element(elem: &Element) -> Attrs {
        let mut attrs = Attrs::new();
        attrs.populate(elem);
        attrs
    }

    /// Replace every field with what this element carries.
    ///
    /// The namespace comes from the element itself. Attributes other than
    /// `type`, `id`, `from`, `to` and `lang` (or `xml:lang`) are ignored.
    pub fn populate(&mut self, elem: &Element) {
        let mut attrs = Attrs {
            xmlns: elem.ns(),
            ..Attrs::default()
        };
        for (name, value) in elem.attrs() {
            let field = match name {
                "type" => &mut attrs.type_,
                "id" => &mut attrs.id,
                "from" => &mut attrs.from,
                "to" => &mut attrs.to,
                "lang" | "xml:lang" => &mut attrs.lang,
                _ => continue,
            };
            *field = value.to_owned();
        }
        log::trace!(
            "Read attributes of <{}/> in namespace '{}'",
            elem.name(),
            attrs.xmlns
        );
        *self = attrs;
    }

    /// The namespace of the element these attributes were read from, empty if
    /// they weren’t read from any.
    pub fn xmlns(&self) -> &str {
        &self.xmlns
    }

    /// Name under which [`Self::lang`] gets exported.
    pub fn lang_key(&self) -> &'static str {
        if self.xmlns.is_empty() {
            "lang"
        } else {
            "xml:lang"
        }
    }

    /// Every non-empty field, keyed by its attribute name.
    pub fn export(&self) -> ExportedAttrs {
        let fields = [
            ("xmlns", &self.xmlns),
            ("type", &self.type_),
            ("id", &self.id),
            ("from", &self.from),
            ("to", &self.to),
            (self.lang_key(), &self.lang),
        ];
        ExportedAttrs(
            fields
                .into_iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(key, value)| (key, value.clone()))
                .collect(),
        )
    }

    /// Emit every exported attribute on the start tag `builder` has open.
    pub fn write_to(&self, builder: &mut Builder) -> Result<()> {
        for (key, value) in self.export() {
            builder.attribute(key, &value)?;
        }
        Ok(())
    }

    /// Set the type of this stanza.
    pub fn with_type<S: Into<String>>(mut self, type_: S) -> Attrs {
        self.type_ = type_.into();
        self
    }

    /// Set the identifier of this stanza.
    pub fn with_id<S: Into<String>>(mut self, id: S) -> Attrs {
        self.id = id.into();
        self
    }

    /// Set the sender of this stanza.
    pub fn with_from<S: Into<String>>(mut self, from: S) -> Attrs {
        self.from = from.into();
        self
    }

    /// Set the recipient of this stanza.
    pub fn with_to<S: Into<String>>(mut self, to: S) -> Attrs {
        self.to = to.into();
        self
    }

    /// Set the language of this stanza.
    pub fn with_lang<S: Into<String>>(mut self, lang: S) -> Attrs {
        self.lang = lang.into();
        self
    }
}

/// Attributes as exported by [`Attrs::export`], in the order they were
/// inserted: `xmlns`, `type`, `id`, `from`, `to`, then the language.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportedAttrs(Vec<(&'static str, String)>);

impl ExportedAttrs {
    /// The value exported under this key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| value.as_str())
    }

    /// Whether a value was exported under this key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of exported attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no attribute got exported at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over key and value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Iterate over keys.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(key, _)| *key)
    }
}

impl IntoIterator for ExportedAttrs {
    type Item = (&'static str, String);
    type IntoIter = std::vec::IntoIter<(&'static str, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<ExportedAttrs> for BTreeMap<String, String> {
    fn from(attrs: ExportedAttrs) -> BTreeMap<String, String> {
        attrs
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect()
    }
}
