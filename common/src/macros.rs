/// Logs a success message.
///
/// Emitted as an `INFO` event on the `hmap::success` target so the terminal
/// formatter can render it with its own symbol.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "hmap::success", $($arg)*)
    };
}
