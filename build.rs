fn main() {
    // Bindings are declared with proc-macros in uniffi_bindings.rs
    // (uniffi::setup_scaffolding!), so there is no UDL file to compile here.
    println!("cargo:rerun-if-changed=src/uniffi_bindings.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
