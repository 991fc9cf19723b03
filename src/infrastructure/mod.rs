pub mod memory_dom;

// Browser-only bindings (needs a real DOM)
#[cfg(target_arch = "wasm32")]
pub mod web_dom;
