use std::env::args;
use std::process::exit;

use xmpp_stanza::{Attrs, Builder, Element, Packet, PacketKind, Stanza};

/// Any stanza, keeping its attributes and children but nothing else.
struct Generic {
    kind: PacketKind,
    attrs: Attrs,
    payloads: Vec<Element>,
}

impl Packet for Generic {
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn serialize_into(&self, builder: &mut Builder) -> xmpp_stanza::Result<()> {
        builder.start_element(self.name())?;
        self.attrs.write_to(builder)?;
        for payload in &self.payloads {
            builder.element(payload)?;
        }
        builder.end_element()
    }
}

impl Stanza for Generic {
    fn kind(&self) -> PacketKind {
        self.kind
    }

    fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = args().collect();
    if args.len() != 2 {
        let program = args.first().map(String::as_str).unwrap_or("render_stanza");
        println!("Usage: {} <stanza>", program);
        exit(1);
    }

    let elem: Element = match args[1].parse() {
        Ok(elem) => elem,
        Err(err) => {
            println!("Invalid XML: {}", err);
            exit(1);
        }
    };
    let kind = match PacketKind::of(&elem) {
        Some(kind) => kind,
        None => {
            println!("Not a stanza: <{}/>", elem.name());
            exit(1);
        }
    };

    let stanza = Generic {
        kind,
        attrs: Attrs::from_element(&elem),
        payloads: elem.children().cloned().collect(),
    };
    for (key, value) in stanza.attrs().export().iter() {
        println!("{}: {}", key, value);
    }
    if !stanza.is_permitted_type() {
        println!("warning: '{}' is not a {} type", stanza.type_(), kind);
    }
    match stanza.render() {
        Ok(xml) => println!("{}", xml),
        Err(err) => {
            println!("Serialisation failed: {}", err);
            exit(1);
        }
    }
}
