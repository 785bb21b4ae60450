// Copyright (c) 2026 xmpp-stanza contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Shared groundwork for the three [XMPP](https://xmpp.org/) stanzas,
//! `<presence/>`, `<message/>` and `<iq/>`.
//!
//! Concrete stanzas embed an [`Attrs`], the addressing and routing
//! attributes they all carry, and implement [`Packet`] to get serialised as
//! a fragment which can be written directly on a stream:
//!
//! ```
//! use xmpp_stanza::{Attrs, Builder, Element, Packet};
//!
//! struct Presence {
//!     attrs: Attrs,
//! }
//!
//! impl Packet for Presence {
//!     fn name(&self) -> &str {
//!         "presence"
//!     }
//!
//!     fn serialize_into(&self, builder: &mut Builder) -> xmpp_stanza::Result<()> {
//!         builder.start_element(self.name())?;
//!         self.attrs.write_to(builder)?;
//!         builder.end_element()
//!     }
//! }
//!
//! let elem: Element = "<presence xmlns='jabber:client' type='unavailable'/>"
//!     .parse()
//!     .unwrap();
//! let presence = Presence {
//!     attrs: Attrs::from_element(&elem),
//! };
//! assert_eq!(
//!     presence.render().unwrap(),
//!     "<presence xmlns=\"jabber:client\" type=\"unavailable\"/>"
//! );
//! ```
//!
//! Values the `type` attribute may take are listed in [`types`], they are
//! not enforced here.
//!
//! Attributes other than `type`, `id`, `from`, `to` and `lang` are dropped
//! when reading an element, extension attributes therefore don’t survive a
//! round trip through [`Attrs`].

#![deny(unsafe_code, missing_docs, bare_trait_objects)]

#[macro_use]
mod util;

pub mod attrs;
pub mod builder;
pub mod error;
pub mod ns;
pub mod packet;
pub mod types;

#[cfg(test)]
mod tests;

pub use crate::attrs::{Attrs, ExportedAttrs};
pub use crate::builder::{Builder, BuilderConfig};
#[doc(inline)]
pub use crate::error::{Error, Result};
pub use crate::packet::{Packet, PacketKind, Stanza};

// Re-exports
pub use minidom;
pub use minidom::Element;
