//! Error types for maze streaming.
//!
//! Other modules `use errors::*;` to get the `Error`, `ErrorKind`, `ResultExt` and `Result` types that
//! `error_chain!` creates.

use error_chain::error_chain;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        ZeroColumns {
            description("a maze row needs at least one column")
            display("a maze row needs at least one column")
        }
        TerminalTooNarrow(terminal_width: u16) {
            description("terminal too narrow for a maze")
            display("a terminal width of {} leaves no room for a single maze column (5 needed)", terminal_width)
        }
        ZeroRows {
            description("a row limit must allow at least one row")
            display("a row limit must allow at least one row")
        }
        InvalidStreamState(operation: &'static str, state: &'static str) {
            description("maze stream operation called in the wrong state")
            display("cannot {} a maze stream that is {}", operation, state)
        }
    }
}
