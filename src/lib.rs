pub mod commands;
pub mod ingest;
pub mod layout;
pub mod schema;
pub mod server;
pub mod store;
pub mod transform;

/// ASCII art logo for loomviz CLI
pub const LOGO: &str = "\
   ╷
   │  ┌─┐┌─┐┌┬┐┬  ┬┬┌─┐
   │  │ ││ ││││└┐┌┘│┌─┘
   ┴─┘└─┘└─┘┴ ┴ └┘ ┴└─┘";
