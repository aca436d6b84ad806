use super::setup::restore_terminal;
use std::panic;

/// Chain a panic hook that restores the terminal before the original hook
/// prints the panic message.
///
/// Install it before creating a [`super::TerminalSession`]. When
/// `color_eyre::install()` is used, call it first so its hook is the one
/// chained.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));
}
