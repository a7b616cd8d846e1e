use super::structure::Structure;
use crate::error::{Result, TensegError};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Renders a tensegrity structure as a MuJoCo model.
///
/// Bars become capsule geoms with free joints and a site at each end;
/// cables become spatial tendons strung between those sites; each actuated
/// cable gets a motor. The model includes a generated `scene.xml` with the
/// floor, lighting and materials.
pub struct MujocoBuilder {
    name: String,
    stiffness: f64,
    damping: f64,
}

impl MujocoBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stiffness: 100.0,
            damping: 1.0,
        }
    }

    pub fn stiffness(mut self, stiffness: f64) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Render the model XML as a string.
    pub fn render(&self, structure: &Structure) -> Result<String> {
        for bar in &structure.bars {
            if bar[0] >= structure.node_count() || bar[1] >= structure.node_count() {
                return Err(TensegError::Model(format!(
                    "Bar endpoint out of range: {:?}",
                    bar
                )));
            }
        }
        for &actuator in &structure.actuators {
            if actuator >= structure.cables.len() {
                return Err(TensegError::Model(format!(
                    "Actuator index out of range: {}",
                    actuator
                )));
            }
        }

        let mut xml = String::new();

        let _ = write!(
            xml,
            r#"<mujoco model="{name}">

    <include file="scene.xml"/>

    <option timestep="0.002" iterations="100" solver="PGS" jacobian="dense" gravity="0 0 -9.8" viscosity="0"/>

    <size njmax="5000" nconmax="500" nstack="5000000"/>

    <asset>
        <material name="rod" rgba=".7 .5 .3 1"/>
    </asset>

    <default>
        <motor ctrllimited="false" ctrlrange="-100 100"/>
        <tendon stiffness="{stiffness}" damping="{damping}" springlength=".5" frictionloss=".2"/>
        <geom size="0.02" mass=".1"/>
        <site size="0.04"/>
        <camera pos="0 -10 0"/>
    </default>

    <worldbody>
"#,
            name = self.name,
            stiffness = self.stiffness,
            damping = self.damping,
        );

        for (i, bar) in structure.bars.iter().enumerate() {
            let n1 = structure.nodes[bar[0]];
            let n2 = structure.nodes[bar[1]];
            let _ = write!(
                xml,
                r#"        <body>
            <geom name="bar{idx}" type="capsule" fromto="{x1} {y1} {z1} {x2} {y2} {z2}" material="rod"/>
            <site name="b{end1}" pos="{x1} {y1} {z1}"/>
            <site name="b{end2}" pos="{x2} {y2} {z2}"/>
            <joint name="r{idx}" type="free" pos="0 0 0" limited="false" damping="0" armature="0" stiffness="0.2"/>
        </body>
"#,
                idx = i + 1,
                end1 = bar[0],
                end2 = bar[1],
                x1 = n1[0],
                y1 = n1[1],
                z1 = n1[2],
                x2 = n2[0],
                y2 = n2[1],
                z2 = n2[2],
            );
        }

        xml.push_str("    </worldbody>\n\n    <tendon>\n");

        for (i, cable) in structure.cables.iter().enumerate() {
            let _ = write!(
                xml,
                r#"        <spatial name="S{idx}" width="0.02">
            <site site="b{end1}"/>
            <site site="b{end2}"/>
        </spatial>
"#,
                idx = i,
                end1 = cable[0],
                end2 = cable[1],
            );
        }

        xml.push_str("    </tendon>\n\n    <actuator>\n");

        for &actuator in &structure.actuators {
            let _ = writeln!(xml, r#"        <motor tendon="S{}" gear="1"/>"#, actuator);
        }

        xml.push_str("    </actuator>\n\n</mujoco>\n");

        Ok(xml)
    }

    /// Write the model and its scene include into `dir`, returning the
    /// model path.
    pub fn write(&self, structure: &Structure, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        write_scene(dir, -1.0)?;

        let model_path = dir.join(format!("{}.xml", self.name));
        fs::write(&model_path, self.render(structure)?)?;
        log::info!("wrote MuJoCo model to {}", model_path.display());
        Ok(model_path)
    }
}

/// Write the shared `scene.xml` (skybox, checkered floor, lighting) into
/// `dir`. `floor_pos` is the z position of the floor plane.
pub fn write_scene(dir: &Path, floor_pos: f64) -> Result<PathBuf> {
    let scene = format!(
        r#"<mujoco>

    <statistic extent="2" meansize=".05"/>

    <visual>
        <rgba haze="0.15 0.25 0.35 1"/>
        <quality shadowsize="2048"/>
        <map stiffness="700" shadowscale="0.5" fogstart="10" fogend="15" zfar="40" haze="0.3"/>
    </visual>

    <asset>
        <texture type="skybox" builtin="gradient" rgb1=".4 .6 .8" rgb2="0 0 0" width="800" height="800" mark="random" markrgb="1 1 1"/>
        <texture name="texplane" type="2d" builtin="checker" rgb1=".2 .3 .4" rgb2=".1 0.15 0.2"
            width="512" height="512" mark="cross" markrgb=".8 .8 .8"/>

        <material name="matplane" reflectance="0.3" texture="texplane" texrepeat="1 1" texuniform="true"/>
    </asset>

    <worldbody>
        <light directional="true" diffuse=".8 .8 .8" specular=".2 .2 .2" pos="0 0 5" dir="0 0 -1"/>
        <geom name="floor" pos="0 0 {floor_pos}" size="10 10 0.125" type="plane" material="matplane" condim="3" friction=".9 .05 .05"/>
    </worldbody>

    <visual>
        <headlight ambient=".4 .4 .4" diffuse=".8 .8 .8" specular="0.1 0.1 0.1"/>
        <map znear=".01"/>
        <quality shadowsize="2048"/>
    </visual>
</mujoco>
"#
    );

    let scene_path = dir.join("scene.xml");
    fs::write(&scene_path, scene)?;
    Ok(scene_path)
}
