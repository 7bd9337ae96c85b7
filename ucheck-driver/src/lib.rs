//! Union Checker - Driver
//! 
//! Hosts the demonstration program and the JSON check-script runner used by
//! the `ucheck` binary.

pub mod demo;
pub mod script;

pub use demo::run_demo;
pub use script::{json_report, run_script, Check, Script, ScriptRunner, SymbolDecl, TypeRef};
