use anyhow::Result;
use scenario_dashboard::config::Config;
use scenario_dashboard::generate::generate;
use scenario_dashboard::logging::{info, obj, v_bool, v_num, v_str, Domain};

fn main() -> Result<()> {
    let cfg = Config::from_env();
    info(
        Domain::System,
        "startup",
        obj(&[
            ("output_path", v_str(&cfg.output_path.to_string_lossy())),
            (
                "dataset_file",
                v_str(
                    &cfg.dataset_file
                        .as_ref()
                        .map(|p| p.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "builtin".to_string()),
                ),
            ),
            ("write_manifest", v_bool(cfg.write_manifest)),
        ]),
    );

    let manifest = generate(&cfg)?;

    info(
        Domain::System,
        "done",
        obj(&[
            ("sections", v_num(manifest.sections.len() as f64)),
            ("page_sha256", v_str(&manifest.page_sha256)),
        ]),
    );
    Ok(())
}
