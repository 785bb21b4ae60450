// Copyright (c) 2026 xmpp-stanza contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Values the `type` attribute of each stanza kind may take, as defined in
//! [RFC 6121](https://xmpp.org/rfcs/rfc6121.html) and
//! [RFC 6120](https://xmpp.org/rfcs/rfc6120.html).
//!
//! Nothing in this crate enforces them, they are provided for the concrete
//! stanzas which validate or default their type.

/// Types of an `<iq/>` stanza.
pub mod iq {
    /// An error has occurred regarding processing of a get or set request.
    pub const ERROR: &str = "error";

    /// The stanza requests information.
    pub const GET: &str = "get";

    /// The stanza is a response to a successful get or set request.
    pub const RESULT: &str = "result";

    /// The stanza provides data that is needed for an operation to be
    /// completed, sets new values, replaces existing values, etc.
    pub const SET: &str = "set";

    /// Every permitted value.
    pub const ALL: &[&str] = &[ERROR, GET, RESULT, SET];
}

/// Types of a `<message/>` stanza.
pub mod message {
    /// A one-to-one conversation.
    pub const CHAT: &str = "chat";

    /// An error has occurred related to a previous message.
    pub const ERROR: &str = "error";

    /// A message sent in the context of a multi-user chat.
    pub const GROUPCHAT: &str = "groupchat";

    /// An alert, notification, or other transient information to which no
    /// reply is expected.
    pub const HEADLINE: &str = "headline";

    /// A standalone message sent outside the context of a conversation.
    pub const NORMAL: &str = "normal";

    /// What a message without a `type` attribute is treated as.
    pub const DEFAULT: &str = NORMAL;

    /// Every permitted value.
    pub const ALL: &[&str] = &[CHAT, ERROR, GROUPCHAT, HEADLINE, NORMAL];
}

/// Types of a `<presence/>` stanza.
///
/// A presence without any type signals availability.
pub mod presence {
    /// An error has occurred regarding processing of a previously sent
    /// presence stanza.
    pub const ERROR: &str = "error";

    /// A request for an entity's current presence.
    pub const PROBE: &str = "probe";

    /// The sender wishes to subscribe to the recipient's presence.
    pub const SUBSCRIBE: &str = "subscribe";

    /// The sender has allowed the recipient to receive their presence.
    pub const SUBSCRIBED: &str = "subscribed";

    /// The sender is no longer available for communication.
    pub const UNAVAILABLE: &str = "unavailable";

    /// The sender is unsubscribing from the receiver's presence.
    pub const UNSUBSCRIBE: &str = "unsubscribe";

    /// The subscription request has been denied or a previously granted
    /// subscription has been canceled.
    pub const UNSUBSCRIBED: &str = "unsubscribed";

    /// Every permitted value.
    pub const ALL: &[&str] = &[
        ERROR,
        PROBE,
        SUBSCRIBE,
        SUBSCRIBED,
        UNAVAILABLE,
        UNSUBSCRIBE,
        UNSUBSCRIBED,
    ];
}
