fn main() {
    println!("cargo::rustc-check-cfg=cfg(folio_log_pretty)");
    println!("cargo::rerun-if-env-changed=FOLIO_LOG_PRETTY");
    if std::env::var("FOLIO_LOG_PRETTY").as_deref() == Ok("1") {
        println!("cargo::rustc-cfg=folio_log_pretty");
    }
}
