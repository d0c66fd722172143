//! Trunk entry point. The browser build mounts the app; native builds have
//! nothing to run.

fn main() {
    #[cfg(feature = "csr")]
    post_composer::app::mount();
}
