use tuples::Arity;

#[derive(Deserialize, Clone, Debug)]
pub struct SceneGraphConf {
    // arity classes of the scene graph tuples that get scored
    pub arities: Vec<Arity>
}

impl SceneGraphConf {
    pub fn default() -> SceneGraphConf {
        SceneGraphConf {
            arities: Arity::all().to_vec()
        }
    }
}
