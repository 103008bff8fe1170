//! # Core Navigation Logic
//!
//! The browsing model: panes, layouts and the drill-down stack.
//! It knows nothing about terminals or the network; `config` is the
//! only part that touches the filesystem.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Viewport (geometry)  │
//!                    │  • ListPane             │
//!                    │  • Layout               │
//!                    │  • NavigationStack      │
//!                    │                         │
//!                    │  No terminal, no RPC.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │  Catalog   │
//!          │  Adapter   │                │  (Mopidy)  │
//!          │ (ratatui)  │                │            │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`viewport`]: index/offset/height math for one scrollable list
//! - [`pane`]: the `ListPane` and its band/album variants
//! - [`layout`]: a row of panes with one focused
//! - [`stack`]: the drill-down history
//! - [`condition`]: recoverable and terminal conditions raised by handlers
//! - [`config`]: `~/.horsempdc/config.toml` loading and resolution

pub mod condition;
pub mod config;
pub mod layout;
pub mod pane;
pub mod stack;
pub mod viewport;
