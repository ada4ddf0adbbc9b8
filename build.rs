// build.rs
// Compiles the gsKit shim and links the PS2SDK libraries when targeting the EE.

use std::env;
use std::path::PathBuf;
use std::process::Command;

const SHIM: &str = "csrc/gs_shim.c";

fn main() {
    println!("cargo:rustc-check-cfg=cfg(ps2_ee)");
    println!("cargo:rerun-if-changed={}", SHIM);
    println!("cargo:rerun-if-env-changed=PS2SDK");
    println!("cargo:rerun-if-env-changed=GSKIT");

    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    if !arch.starts_with("mips") {
        return;
    }
    println!("cargo:rustc-cfg=ps2_ee");

    let ps2sdk = match env::var("PS2SDK") {
        Ok(sdk) => PathBuf::from(sdk),
        Err(_) => {
            eprintln!("error: PS2SDK not set");
            eprintln!("hint: install ps2sdk and export PS2SDK (usually $PS2DEV/ps2sdk)");
            panic!("PS2SDK not found");
        }
    };
    let gskit = env::var("GSKIT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| ps2sdk.join("ports"));

    let cc = env::var("EE_CC").unwrap_or_else(|_| "mips64r5900el-ps2-elf-gcc".to_string());
    let ar = env::var("EE_AR").unwrap_or_else(|_| "mips64r5900el-ps2-elf-ar".to_string());

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let object = out_dir.join("gs_shim.o");
    let archive = out_dir.join("libgs_shim.a");

    let status = Command::new(&cc)
        .args(["-O2", "-G0", "-D_EE", "-c", SHIM, "-o"])
        .arg(&object)
        .arg(format!("-I{}", ps2sdk.join("ee/include").display()))
        .arg(format!("-I{}", ps2sdk.join("common/include").display()))
        .arg(format!("-I{}", gskit.join("include").display()))
        .status()
        .unwrap_or_else(|e| panic!("failed to run {}: {}", cc, e));
    if !status.success() {
        panic!("{} failed to compile {}", cc, SHIM);
    }

    let status = Command::new(&ar)
        .arg("rcs")
        .arg(&archive)
        .arg(&object)
        .status()
        .unwrap_or_else(|e| panic!("failed to run {}: {}", ar, e));
    if !status.success() {
        panic!("{} failed to archive the gsKit shim", ar);
    }

    println!("cargo:rustc-link-search=native={}", out_dir.display());
    println!("cargo:rustc-link-search=native={}", gskit.join("lib").display());
    println!("cargo:rustc-link-search=native={}", ps2sdk.join("ee/lib").display());
    println!("cargo:rustc-link-lib=static=gs_shim");
    println!("cargo:rustc-link-lib=static=gskit");
    println!("cargo:rustc-link-lib=static=dmakit");
    println!("cargo:rustc-link-lib=static=kernel");
}
