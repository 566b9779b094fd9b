fn main() {
    let report = swagger_builder_build::generate_builders()
        .scan_path("src/examples")
        .crate_name("crate::examples")
        .run()
        .expect("Failed to generate example builders");

    if report.has_failures() {
        println!(
            "cargo:warning=swagger-builder: {} of {} example builders failed",
            report.failures.len(),
            report.total()
        );
    }

    println!("cargo:rerun-if-changed=src/examples");
    println!("cargo:rerun-if-changed=build.rs");
}
