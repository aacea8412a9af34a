//! CSR entry point: logger init, panic hook, mount to `<body>`.

fn main() {
    #[cfg(feature = "csr")]
    {
        _ = console_log::init_with_level(log::Level::Debug);
        console_error_panic_hook::set_once();

        leptos::mount::mount_to_body(pocket_chat::app::App);
    }
}
