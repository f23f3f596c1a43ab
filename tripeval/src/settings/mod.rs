use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use serde_yaml;
use algorithm::meteor::MeteorParams;

pub mod conf_backend;
pub mod conf_scene_graph;

pub use self::conf_backend::*;
pub use self::conf_scene_graph::*;
use errors::*;
use similarity::MethodsByArity;

#[derive(Clone, Deserialize)]
pub struct Settings {
    // similarity method of each arity class
    #[serde(default = "MethodsByArity::default")]
    pub methods: MethodsByArity,
    #[serde(default = "MeteorParams::default")]
    pub meteor: MeteorParams,
    #[serde(default = "BackendConf::default")]
    pub backend: BackendConf,
    #[serde(default = "SceneGraphConf::default")]
    pub scene_graph: SceneGraphConf,
}

/// Layout of a settings file, settings are under the `settings` key
#[derive(Deserialize, Debug)]
pub struct Configuration {
    pub settings: Settings
}

impl Settings {
    pub fn default() -> Settings {
        Settings {
            methods: MethodsByArity::default(),
            meteor: MeteorParams::default(),
            backend: BackendConf::default(),
            scene_graph: SceneGraphConf::default(),
        }
    }

    pub fn from_file(fpath: &Path) -> Result<Settings> {
        let reader = BufReader::new(File::open(fpath)
            .chain_err(|| format!("Cannot open settings file: {:?}", fpath))?);
        let conf: Configuration = serde_yaml::from_reader(reader)
            .chain_err(|| format!("Invalid settings file: {:?}", fpath))?;
        Ok(conf.settings)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, r#"
****************************** SETTINGS ******************************
methods: {:?}
meteor: {:?}
backend: {:?}
scene_graph: {:?}
**********************************************************************
"#,
    self.methods,
    self.meteor,
    self.backend,
    self.scene_graph)
    }
}
