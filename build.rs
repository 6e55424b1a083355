//! Build script for proto compilation.
//!
//! The generated code is committed under `src/generated/`, so this only
//! needs to run when a `.proto` file changes.
//!
//! To regenerate: `cargo build --features regenerate-proto`

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "regenerate-proto")]
    {
        let out_dir = std::path::PathBuf::from("src/generated");
        tonic_prost_build::configure()
            .build_client(false)
            .build_server(false)
            .out_dir(&out_dir)
            .compile_protos(
                &["proto/controlplane.proto", "proto/dataplane.proto"],
                &["proto"],
            )?;

        for (generated, target) in [
            ("redpanda.controlplane.v1.rs", "controlplane.rs"),
            ("redpanda.dataplane.v1.rs", "dataplane.rs"),
        ] {
            let generated = out_dir.join(generated);
            if generated.exists() {
                std::fs::rename(generated, out_dir.join(target))?;
            }
        }
    }

    println!("cargo:rerun-if-changed=proto/controlplane.proto");
    println!("cargo:rerun-if-changed=proto/dataplane.proto");

    Ok(())
}
