mod bodies;
mod flycam;
mod orbit;
mod scene;
mod starfield;

use bodies::SceneConfig;
use scene::SpaceScene;

orrery_web::export_scene!(SpaceScene, SceneConfig, "space-scene");
