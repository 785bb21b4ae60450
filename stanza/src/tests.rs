// Copyright (c) 2026 xmpp-stanza contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{ns, types, Attrs, Builder, Element, Error, Packet, PacketKind, Result, Stanza};

struct Presence {
    attrs: Attrs,
}

impl Packet for Presence {
    fn name(&self) -> &str {
        "presence"
    }

    fn serialize_into(&self, builder: &mut Builder) -> Result<()> {
        builder.start_element(self.name())?;
        builder.end_element()
    }
}

impl Stanza for Presence {
    fn kind(&self) -> PacketKind {
        PacketKind::Presence
    }

    fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

struct Message {
    attrs: Attrs,
    body: Option<String>,
    payloads: Vec<Element>,
}

impl Message {
    fn from_element(elem: &Element) -> Message {
        let ns = elem.ns();
        Message {
            attrs: Attrs::from_element(elem),
            body: elem.get_child("body", ns.as_str()).map(Element::text),
            payloads: elem
                .children()
                .filter(|child| child.name() != "body")
                .cloned()
                .collect(),
        }
    }
}

impl Packet for Message {
    fn name(&self) -> &str {
        "message"
    }

    fn serialize_into(&self, builder: &mut Builder) -> Result<()> {
        builder.start_element(self.name())?;
        self.attrs.write_to(builder)?;
        if let Some(body) = &self.body {
            builder.start_element("body")?;
            builder.text(body)?;
            builder.end_element()?;
        }
        for payload in &self.payloads {
            builder.element(payload)?;
        }
        builder.end_element()
    }
}

impl Stanza for Message {
    fn kind(&self) -> PacketKind {
        PacketKind::Message
    }

    fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

struct Broken;

impl Packet for Broken {
    fn name(&self) -> &str {
        "iq"
    }

    fn serialize_into(&self, builder: &mut Builder) -> Result<()> {
        builder.start_element(self.name())
    }
}

struct Doubled {
    attrs: Attrs,
}

impl Packet for Doubled {
    fn name(&self) -> &str {
        "iq"
    }

    fn serialize_into(&self, builder: &mut Builder) -> Result<()> {
        builder.start_element(self.name())?;
        self.attrs.write_to(builder)?;
        self.attrs.write_to(builder)?;
        builder.end_element()
    }
}

#[test]
fn bare_presence() {
    let presence = Presence {
        attrs: Attrs::new(),
    };
    assert_eq!(presence.render().unwrap(), "<presence/>");
}

#[test]
fn render_twice() {
    let elem: Element = "<message xmlns='jabber:client' type='chat' to='juliet@example.com'><body>Art thou not Romeo?</body></message>"
        .parse()
        .unwrap();
    let message = Message::from_element(&elem);
    let first = message.render().unwrap();
    assert_eq!(first, message.render().unwrap());
    assert!(!first.starts_with("<?xml"));
    assert!(!first.starts_with('\n'));
}

#[test]
fn render_message() {
    let elem: Element = "<message xmlns='jabber:client' type='chat' id='m1' xml:lang='en'><body>Hi</body><active xmlns='http://jabber.org/protocol/chatstates'/></message>"
        .parse()
        .unwrap();
    let message = Message::from_element(&elem);
    assert_eq!(
        message.render().unwrap(),
        "<message xmlns=\"jabber:client\" type=\"chat\" id=\"m1\" xml:lang=\"en\">\n  <body>Hi</body>\n  <active xmlns=\"http://jabber.org/protocol/chatstates\"/>\n</message>"
    );
}

#[test]
fn render_reflects_mutation() {
    let elem: Element = "<message xmlns='jabber:client'/>".parse().unwrap();
    let mut message = Message::from_element(&elem);
    assert_eq!(
        message.render().unwrap(),
        "<message xmlns=\"jabber:client\"/>"
    );
    message.attrs_mut().type_ = String::from(types::message::HEADLINE);
    message.attrs_mut().from = String::from("news.example");
    assert_eq!(
        message.render().unwrap(),
        "<message xmlns=\"jabber:client\" type=\"headline\" from=\"news.example\"/>"
    );
}

#[test]
fn render_failure_surfaces() {
    match Broken.render() {
        Err(Error::UnclosedElement(name)) => assert_eq!(name, "iq"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn forwarding_accessors() {
    let elem: Element = "<presence xmlns='jabber:client' type='subscribe' id='s1' from='romeo@example.net' to='juliet@example.com' xml:lang='en'/>"
        .parse()
        .unwrap();
    let presence = Presence {
        attrs: Attrs::from_element(&elem),
    };
    assert_eq!(presence.type_(), types::presence::SUBSCRIBE);
    assert_eq!(presence.id(), "s1");
    assert_eq!(presence.from(), "romeo@example.net");
    assert_eq!(presence.to(), "juliet@example.com");
    assert_eq!(presence.lang(), "en");
    assert_eq!(presence.xmlns(), ns::JABBER_CLIENT);
    assert!(presence.is_permitted_type());
}

#[test]
fn type_not_validated() {
    let elem: Element = "<presence xmlns='jabber:client' type='online'/>"
        .parse()
        .unwrap();
    let presence = Presence {
        attrs: Attrs::from_element(&elem),
    };
    assert_eq!(presence.type_(), "online");
    assert!(!presence.is_permitted_type());
}

#[test]
fn dispatch_by_name() {
    let elem: Element = "<message xmlns='jabber:client' type='groupchat'/>"
        .parse()
        .unwrap();
    let stanza: Box<dyn Stanza> = match PacketKind::of(&elem) {
        Some(PacketKind::Message) => Box::new(Message::from_element(&elem)),
        Some(PacketKind::Presence) => Box::new(Presence {
            attrs: Attrs::from_element(&elem),
        }),
        other => panic!("unexpected kind: {:?}", other),
    };
    assert_eq!(stanza.kind(), PacketKind::Message);
    assert_eq!(stanza.name(), stanza.kind().name());
    assert!(stanza.is_permitted_type());
}

#[test]
fn extension_attributes_dropped() {
    let elem: Element = "<message xmlns='jabber:client' id='1' foo='bar'/>"
        .parse()
        .unwrap();
    let message = Message::from_element(&elem);
    assert_eq!(
        message.render().unwrap(),
        "<message xmlns=\"jabber:client\" id=\"1\"/>"
    );
}

#[test]
fn render_rejects_invalid_chars() {
    let message = Message {
        attrs: Attrs::new().with_from("a\u{1}b"),
        body: None,
        payloads: vec![],
    };
    match message.render() {
        Err(Error::InvalidXml(_)) => (),
        other => panic!("unexpected result: {:?}", other),
    }

    let message = Message {
        attrs: Attrs::new(),
        body: Some(String::from("x\u{0}y")),
        payloads: vec![],
    };
    match message.render() {
        Err(Error::InvalidXml(_)) => (),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn render_rejects_duplicate_attributes() {
    let iq = Doubled {
        attrs: Attrs::new().with_type(types::iq::GET),
    };
    match iq.render() {
        Err(Error::DuplicateAttribute(name)) => assert_eq!(name, "type"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn render_default_namespace() {
    let elem = Element::builder("message", ns::DEFAULT_NS)
        .attr("type", types::message::NORMAL)
        .build();
    let message = Message::from_element(&elem);
    assert_eq!(message.xmlns(), ns::DEFAULT_NS);
    assert_eq!(
        message.render().unwrap(),
        format!("<message xmlns=\"{}\" type=\"normal\"/>", ns::DEFAULT_NS)
    );
}
