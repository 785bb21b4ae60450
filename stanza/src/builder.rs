// Copyright (c) 2026 xmpp-stanza contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! # Streaming XML document builder
//!
//! [`Builder`] turns a sequence of start tag, attribute, text and end tag
//! emissions into an indented XML document. Attribute values are always
//! written between double quotes, and both attribute values and text are
//! escaped on the way out.
//!
//! Names and character data are checked against the XML grammar before
//! being written, so a document which [`Builder::finish`] returns is always
//! well-formed.
//!
//! Start tags are held back until their first child (or their end) is
//! emitted, so that attributes can still be appended to them, and so that
//! elements without content are written in their self-closing form.

use minidom::{Element, Node};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use rxml_validation::{validate_cdata, validate_name};

use crate::error::{Error, Result};

/// The prologue written at the start of every document when
/// [`BuilderConfig::declaration`] is set.
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\"?>";

/// How a [`Builder`] lays out its document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Character repeated to indent nested elements.
    pub indent_char: u8,

    /// How many times [`Self::indent_char`] is repeated per nesting level,
    /// zero disables indentation and line breaks altogether.
    pub indent_size: usize,

    /// Whether to start the document with [`XML_DECLARATION`].
    pub declaration: bool,
}

impl Default for BuilderConfig {
    fn default() -> BuilderConfig {
        BuilderConfig {
            indent_char: b' ',
            indent_size: 2,
            declaration: true,
        }
    }
}

#[derive(Debug)]
struct OpenElement {
    name: String,
    ns: String,
}

/// Builds an XML document out of individual emissions.
pub struct Builder {
    writer: Writer<Vec<u8>>,
    declaration: bool,
    started: bool,
    pending: Option<BytesStart<'static>>,
    open: Vec<OpenElement>,
}

impl Builder {
    /// Create a builder with two-space indentation which emits the XML
    /// declaration.
    pub fn new() -> Builder {
        Builder::with_config(BuilderConfig::default())
    }

    /// Create a builder laying out its document according to `config`.
    pub fn with_config(config: BuilderConfig) -> Builder {
        let writer = if config.indent_size == 0 {
            Writer::new(Vec::new())
        } else {
            Writer::new_with_indent(Vec::new(), config.indent_char, config.indent_size)
        };
        Builder {
            writer,
            declaration: config.declaration,
            started: false,
            pending: None,
            open: Vec::new(),
        }
    }

    /// Number of elements currently open.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Open a new element, nested in the currently open one if any.
    pub fn start_element(&mut self, name: &str) -> Result<()> {
        validate_name(name)?;
        self.flush_pending()?;
        let ns = self.current_ns().to_owned();
        self.pending = Some(BytesStart::new(name.to_owned()));
        self.open.push(OpenElement {
            name: name.to_owned(),
            ns,
        });
        Ok(())
    }

    /// Add an attribute to the element opened last.
    ///
    /// This fails with [`Error::NoOpenElement`] once that element has
    /// received any content, and with [`Error::DuplicateAttribute`] if it
    /// already carries this attribute.
    pub fn attribute(&mut self, name: &str, value: &str) -> Result<()> {
        validate_name(name)?;
        validate_cdata(value)?;
        let start = self.pending.as_mut().ok_or(Error::NoOpenElement)?;
        if start
            .attributes()
            .with_checks(false)
            .flatten()
            .any(|attr| attr.key.as_ref() == name.as_bytes())
        {
            return Err(Error::DuplicateAttribute(name.to_owned()));
        }
        start.push_attribute((name, value));
        if name == "xmlns" {
            if let Some(open) = self.open.last_mut() {
                open.ns = value.to_owned();
            }
        }
        Ok(())
    }

    /// Append character data to the currently open element.
    pub fn text(&mut self, text: &str) -> Result<()> {
        if self.open.is_empty() {
            return Err(Error::NoOpenElement);
        }
        validate_cdata(text)?;
        self.flush_pending()?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// Close the element opened last.
    pub fn end_element(&mut self) -> Result<()> {
        let open = self.open.pop().ok_or(Error::UnbalancedEnd)?;
        match self.pending.take() {
            Some(start) => self.writer.write_event(Event::Empty(start))?,
            None => self
                .writer
                .write_event(Event::End(BytesEnd::new(open.name)))?,
        }
        Ok(())
    }

    /// Emit a whole element tree, declaring its namespace whenever it differs
    /// from the one in scope, along with every prefix it declares.
    pub fn element(&mut self, elem: &Element) -> Result<()> {
        let inherited = self.current_ns().to_owned();
        self.start_element(elem.name())?;
        let ns = elem.ns();
        if ns != inherited {
            self.attribute("xmlns", &ns)?;
        }
        for (prefix, prefix_ns) in elem.prefixes.declared_prefixes() {
            if let Some(prefix) = prefix {
                self.attribute(&format!("xmlns:{}", prefix), prefix_ns)?;
            }
        }
        for (name, value) in elem.attrs() {
            self.attribute(name, value)?;
        }
        for node in elem.nodes() {
            match node {
                Node::Element(child) => self.element(child)?,
                Node::Text(text) => self.text(text)?,
            }
        }
        self.end_element()
    }

    /// Consume the builder and return the assembled document.
    pub fn finish(mut self) -> Result<String> {
        if let Some(open) = self.open.last() {
            return Err(Error::UnclosedElement(open.name.clone()));
        }
        self.write_declaration()?;
        Ok(String::from_utf8(self.writer.into_inner())?)
    }

    fn current_ns(&self) -> &str {
        self.open.last().map(|open| open.ns.as_str()).unwrap_or("")
    }

    fn write_declaration(&mut self) -> Result<()> {
        if !self.started {
            self.started = true;
            if self.declaration {
                self.writer
                    .write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;
            }
        }
        Ok(())
    }

    fn flush_pending(&mut self) -> Result<()> {
        self.write_declaration()?;
        if let Some(start) = self.pending.take() {
            self.writer.write_event(Event::Start(start))?;
        }
        Ok(())
    }
}

impl Default for Builder {
    fn default() -> Builder {
        Builder::new()
    }
}
