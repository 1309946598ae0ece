/*! # Gridsync

Gridsync synchronizes the state of a small server-authoritative arena game between a server and
its clients, using a compact bit-packed wire format.

- [`types`] holds the ids, inputs, poses and colors shared by every crate
- [`bits`] reads and writes individual bits, and quantizes floats to a fixed number of bits
- [`messages`] defines the seven messages of the protocol and the
  [`MessageCodec`](prelude::MessageCodec)
- [`link`] buffers the datagrams exchanged with the remote peers
- [`router`] encodes, sends, receives and dispatches messages according to the local
  [`Role`](prelude::Role)
- `game` (feature `game`) is a reference implementation of the game state

```rust,no_run
use gridsync::prelude::*;

let config = GridsyncConfig::from_path("gridsync.json").unwrap();
gridsync::log::init_logging(&config.log).unwrap();
let (server_io, _clients) = CrossbeamIo::star([1]);
let router = ProtocolRouter::new(Role::Authoritative, MessageCodec::new(config.codec()), server_io)
    .with_sync_config(&config.sync);
```
*/

pub mod config;
mod error;
pub mod log;

pub use error::{GridsyncError, Result};

pub mod types {
    pub use gridsync_core::*;
}

pub mod bits {
    pub use gridsync_serde::*;
}

pub mod messages {
    pub use gridsync_messages::*;
}

pub mod link {
    pub use gridsync_link::*;
}

pub mod router {
    pub use gridsync_router::*;
}

#[cfg(feature = "game")]
pub mod game {
    pub use gridsync_game::*;
}

pub mod prelude {
    pub use gridsync_core::prelude::*;
    #[cfg(feature = "game")]
    pub use gridsync_game::prelude::*;
    pub use gridsync_link::prelude::*;
    pub use gridsync_messages::prelude::*;
    pub use gridsync_router::prelude::*;
    pub use gridsync_serde::prelude::*;

    pub use crate::config::GridsyncConfig;
    pub use crate::log::{LogConfig, init_logging};
    pub use crate::{GridsyncError, Result};
}
