use web::{Entry, RootHandle, bootstrap, page_config};

fn main() {
    let config = page_config();
    bootstrap(RootHandle::from(&config), Entry::App, config);
}
