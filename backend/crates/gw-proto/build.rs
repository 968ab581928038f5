use std::env;
use std::path::PathBuf;

const PROTO_FILES: [&str; 6] = [
    "google/protobuf/any.proto",
    "cosmos/base/v1beta1/coin.proto",
    "cosmos/base/query/v1beta1/pagination.proto",
    "cosmos/base/abci/v1beta1/abci.proto",
    "cosmos/bank/v1beta1/bank.proto",
    "registry/v1/registry.proto",
];

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let proto_root = PathBuf::from(&manifest_dir)
        .parent() // -> backend/crates
        .unwrap()
        .parent() // -> backend
        .unwrap()
        .parent() // -> repo root
        .unwrap()
        .join("proto");

    let proto_files: Vec<PathBuf> = PROTO_FILES.iter().map(|f| proto_root.join(f)).collect();

    // Any is generated here rather than taken from prost-types
    prost_build::Config::new()
        .out_dir("src/generated")
        .compile_well_known_types()
        .compile_protos(&proto_files, &[&proto_root])
        .expect("Failed to compile protobuf definitions");

    for file in &proto_files {
        println!("cargo:rerun-if-changed={}", file.display());
    }
}
