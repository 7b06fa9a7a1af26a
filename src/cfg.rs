use {
    std::fs,
    crate::Result,
    serde::Deserialize,
    accelcfg::Geometry,
    directories::ProjectDirs
};

#[derive(Deserialize)]
pub struct Config {
    #[serde(default = "initial_variant")]
    pub initial_variant: String,
    #[serde(default)]
    pub layout: Geometry
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_variant: initial_variant(),
            layout: <_>::default()
        }
    }
}

fn initial_variant() -> String {
    "Off".into()
}

pub fn read_config() -> Result<Config> {
    let dirs = ProjectDirs::from("io.github", "reslario", "accelcfg")
        .ok_or("couldn't get program directories")?;
    let dir = dirs.config_dir();

    let path = dir.join("config.yaml");

    if path.exists() {
        let yaml = fs::read_to_string(path)?;

        parse(&yaml)
    } else {
        fs::create_dir_all(dir)?;
        fs::write(path, DEFAULT_CFG_FILE)?;
        Ok(<_>::default())
    }
}

fn parse(yaml: &str) -> Result<Config> {
    // an all-comment file is an empty document
    if yaml.lines().all(|line| line.trim().is_empty() || line.trim_start().starts_with('#')) {
        return Ok(<_>::default())
    }

    serde_yaml::from_str(yaml)
        .map_err(<_>::into)
}

pub fn load_config() -> Config {
    let config = read_config()
        .map_err(|e| eprintln!("config error: {}", e))
        .unwrap_or_default();

    log::debug!(
        "initial acceleration type = {}, rows at {} every {}",
        config.initial_variant,
        config.layout.top,
        config.layout.spacing
    );

    config
}

macro_rules! lines {
    ($($lit:literal)*) => {
        concat!(
            $( concat!($lit, "\n") ),*
        )
    };
}

const DEFAULT_CFG_FILE: &str = lines!(
    "# acceleration type selected when no other is given"
    "# (Linear, Classic, Natural, Power, NaturalGain, SigmoidGain or Off)"
    "initial_variant: \"Off\""
    ""
    "# vertical placement of the parameter rows"
    "layout:"
    "  top: 0"
    "  spacing: 30"
);
