fn main() {
    // Only compile Windows resources on Windows target
    #[cfg(target_os = "windows")]
    {
        println!("cargo:rerun-if-changed=resources/windows/resources.rc");
        // Embed the Windows resource file (version info shown in Explorer)
        let _ = embed_resource::compile("resources/windows/resources.rc", embed_resource::NONE);
    }
}
