pub mod analyzers;
pub mod logging;
pub mod output;
pub mod roster;
