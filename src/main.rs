mod app;
mod board;
mod components;
mod models;

use app::App;

fn main() {
    // Surface panics in the browser console instead of a silent abort
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
