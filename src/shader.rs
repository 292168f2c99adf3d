//! WGSL programs for the scene and the CPU-side compile/link checks run
//! before anything is handed to the GPU.
//!
//! Every program is a separate vertex module and fragment module. A program
//! "links" when each location the fragment stage reads is written by the
//! vertex stage with the same type.

use std::fmt;

use log::{debug, error};
use naga::valid::{Capabilities, ValidationFlags, Validator};
use naga::{Binding, Handle, Module, Type, TypeInner};
use thiserror::Error;

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    pub fn entry_point(self) -> &'static str {
        match self {
            Stage::Vertex => VERTEX_ENTRY,
            Stage::Fragment => FRAGMENT_ENTRY,
        }
    }

    fn naga_stage(self) -> naga::ShaderStage {
        match self {
            Stage::Vertex => naga::ShaderStage::Vertex,
            Stage::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Vertex => f.write_str("vertex"),
            Stage::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("{program}: {stage} stage failed to compile\n{log}")]
    Compile {
        program: String,
        stage: Stage,
        log: String,
    },
    #[error("{program}: program failed to link\n{log}")]
    Link { program: String, log: String },
}

/// Phong strengths baked into a textured program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongMaterial {
    pub ambient_strength: f32,
    pub specular_intensity: f32,
    pub highlight_size: f32,
}

impl PhongMaterial {
    pub const fn new(ambient_strength: f32, specular_intensity: f32) -> Self {
        Self {
            ambient_strength,
            specular_intensity,
            highlight_size: 16.0,
        }
    }
}

/// Source text for one vertex + fragment pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramSource {
    pub label: String,
    pub vertex: String,
    pub fragment: String,
}

impl ProgramSource {
    pub fn new(label: impl Into<String>, vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// Lit, textured program with the given material constants.
    pub fn phong(label: impl Into<String>, material: &PhongMaterial) -> Self {
        let mut fragment = String::from(OBJECT_UNIFORMS);
        fragment.push_str(OBJECT_TEXTURE_BINDINGS);
        fragment.push_str(&format!(
            "const AMBIENT_STRENGTH: f32 = {:?};\n",
            material.ambient_strength
        ));
        fragment.push_str(&format!(
            "const SPECULAR_INTENSITY: f32 = {:?};\n",
            material.specular_intensity
        ));
        fragment.push_str(&format!(
            "const HIGHLIGHT_SIZE: f32 = {:?};\n",
            material.highlight_size
        ));
        fragment.push_str(PHONG_FRAGMENT);

        Self::new(label, format!("{OBJECT_UNIFORMS}{PHONG_VERTEX}"), fragment)
    }

    /// Unlit white program used for the light indicator.
    pub fn lamp() -> Self {
        Self::new("lamp", LAMP_VERTEX, LAMP_FRAGMENT)
    }
}

/// Location-bound value crossing the vertex/fragment boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceSlot {
    pub location: u32,
    pub ty: TypeInner,
}

/// Resource binding declared by a program, keyed by variable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformBinding {
    pub name: String,
    pub group: u32,
    pub binding: u32,
    /// Declared type: the struct name, or the resource shape for textures and samplers.
    pub ty: String,
}

/// One validated shader stage.
#[derive(Debug)]
pub struct CompiledStage {
    pub stage: Stage,
    pub source: String,
    module: Module,
}

impl CompiledStage {
    /// Parses and validates `source`, requiring the stage's entry point.
    pub fn compile(program: &str, stage: Stage, source: &str) -> Result<Self, ShaderError> {
        let compile_error = |log: String| ShaderError::Compile {
            program: program.to_string(),
            stage,
            log,
        };

        let module = naga::front::wgsl::parse_str(source)
            .map_err(|err| compile_error(err.emit_to_string(source)))?;

        let mut validator = Validator::new(ValidationFlags::all(), Capabilities::all());
        validator
            .validate(&module)
            .map_err(|err| compile_error(err.emit_to_string(source)))?;

        let has_entry = module
            .entry_points
            .iter()
            .any(|ep| ep.stage == stage.naga_stage() && ep.name == stage.entry_point());
        if !has_entry {
            return Err(compile_error(format!(
                "missing {stage} entry point `{}`",
                stage.entry_point()
            )));
        }

        Ok(Self {
            stage,
            source: source.to_string(),
            module,
        })
    }

    /// Values written (vertex) or read (fragment) by location.
    pub fn varyings(&self) -> Vec<InterfaceSlot> {
        let mut slots = Vec::new();
        let Some(entry) = self
            .module
            .entry_points
            .iter()
            .find(|ep| ep.name == self.stage.entry_point())
        else {
            return slots;
        };

        match self.stage {
            Stage::Vertex => {
                if let Some(result) = &entry.function.result {
                    collect_slots(&self.module, result.ty, result.binding.as_ref(), &mut slots);
                }
            }
            Stage::Fragment => {
                for argument in &entry.function.arguments {
                    collect_slots(&self.module, argument.ty, argument.binding.as_ref(), &mut slots);
                }
            }
        }
        slots.sort_by_key(|slot| slot.location);
        slots
    }

    fn bindings(&self) -> impl Iterator<Item = UniformBinding> + '_ {
        self.module
            .global_variables
            .iter()
            .filter_map(|(_, global)| {
                let binding = global.binding.as_ref()?;
                let ty = &self.module.types[global.ty];
                Some(UniformBinding {
                    name: global.name.clone().unwrap_or_default(),
                    group: binding.group,
                    binding: binding.binding,
                    ty: ty.name.clone().unwrap_or_else(|| format!("{:?}", ty.inner)),
                })
            })
    }
}

fn collect_slots(
    module: &Module,
    ty: Handle<Type>,
    binding: Option<&Binding>,
    slots: &mut Vec<InterfaceSlot>,
) {
    match binding {
        Some(Binding::Location { location, .. }) => slots.push(InterfaceSlot {
            location: *location,
            ty: module.types[ty].inner.clone(),
        }),
        Some(Binding::BuiltIn(_)) => {}
        None => {
            if let TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for member in members {
                    collect_slots(module, member.ty, member.binding.as_ref(), slots);
                }
            }
        }
    }
}

/// A vertex + fragment pair that compiled and linked.
#[derive(Debug)]
pub struct ShaderProgram {
    label: String,
    vertex: CompiledStage,
    fragment: CompiledStage,
    bindings: Vec<UniformBinding>,
}

impl ShaderProgram {
    /// Compiles the vertex stage, then the fragment stage, then links them.
    ///
    /// Diagnostics are logged before the error is returned.
    pub fn build(source: &ProgramSource) -> Result<Self, ShaderError> {
        let result = Self::compile_and_link(source);
        match &result {
            Ok(program) => debug!(
                "linked program {} with {} bindings",
                program.label,
                program.bindings.len()
            ),
            Err(err) => error!("{err}"),
        }
        result
    }

    fn compile_and_link(source: &ProgramSource) -> Result<Self, ShaderError> {
        let vertex = CompiledStage::compile(&source.label, Stage::Vertex, &source.vertex)?;
        let fragment = CompiledStage::compile(&source.label, Stage::Fragment, &source.fragment)?;
        link_interface(&source.label, &vertex, &fragment)?;

        let mut bindings: Vec<UniformBinding> = Vec::new();
        for binding in vertex.bindings().chain(fragment.bindings()) {
            let slot = bindings
                .iter()
                .find(|b| b.group == binding.group && b.binding == binding.binding);
            match slot {
                None => bindings.push(binding),
                Some(existing) if existing.name == binding.name && existing.ty == binding.ty => {}
                Some(existing) => {
                    return Err(ShaderError::Link {
                        program: source.label.clone(),
                        log: format!(
                            "group {} binding {} is `{}: {}` in one stage and `{}: {}` in the other",
                            binding.group,
                            binding.binding,
                            existing.name,
                            existing.ty,
                            binding.name,
                            binding.ty
                        ),
                    });
                }
            }
        }
        bindings.sort_by_key(|b| (b.group, b.binding));

        Ok(Self {
            label: source.label.clone(),
            vertex,
            fragment,
            bindings,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn vertex(&self) -> &CompiledStage {
        &self.vertex
    }

    pub fn fragment(&self) -> &CompiledStage {
        &self.fragment
    }

    pub fn bindings(&self) -> &[UniformBinding] {
        &self.bindings
    }

    /// `(group, binding)` of a named resource, resolved at link time.
    pub fn binding(&self, name: &str) -> Option<(u32, u32)> {
        self.bindings
            .iter()
            .find(|b| b.name == name)
            .map(|b| (b.group, b.binding))
    }
}

fn link_interface(
    program: &str,
    vertex: &CompiledStage,
    fragment: &CompiledStage,
) -> Result<(), ShaderError> {
    let outputs = vertex.varyings();
    for input in fragment.varyings() {
        match outputs.iter().find(|out| out.location == input.location) {
            None => {
                return Err(ShaderError::Link {
                    program: program.to_string(),
                    log: format!(
                        "fragment input at location {} is not written by the vertex stage",
                        input.location
                    ),
                });
            }
            Some(output) if output.ty != input.ty => {
                return Err(ShaderError::Link {
                    program: program.to_string(),
                    log: format!(
                        "location {} type mismatch: vertex writes {:?}, fragment reads {:?}",
                        input.location, output.ty, input.ty
                    ),
                });
            }
            Some(_) => {}
        }
    }
    Ok(())
}

const OBJECT_UNIFORMS: &str = r#"
struct ObjectUniforms {
    model: mat4x4<f32>,
    normal_matrix: mat4x4<f32>,
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
    object_color: vec4<f32>,
    light_color: vec4<f32>,
    light_position: vec4<f32>,
    view_position: vec4<f32>,
    uv_scale: vec4<f32>,
}

@group(0) @binding(0)
var<uniform> uniforms: ObjectUniforms;
"#;

const OBJECT_TEXTURE_BINDINGS: &str = r#"
@group(0) @binding(1)
var object_texture: texture_2d<f32>;

@group(0) @binding(2)
var object_sampler: sampler;

"#;

const PHONG_VERTEX: &str = r#"
struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) normal: vec3<f32>,
    @location(1) fragment_position: vec3<f32>,
    @location(2) uv: vec2<f32>,
}

@vertex
fn vs_main(input: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let world_position = uniforms.model * vec4<f32>(input.position, 1.0);
    out.clip_position = uniforms.projection * uniforms.view * world_position;
    out.fragment_position = world_position.xyz;
    out.normal = (uniforms.normal_matrix * vec4<f32>(input.normal, 0.0)).xyz;
    out.uv = input.uv;
    return out;
}
"#;

const PHONG_FRAGMENT: &str = r#"
struct FragmentInput {
    @location(0) normal: vec3<f32>,
    @location(1) fragment_position: vec3<f32>,
    @location(2) uv: vec2<f32>,
}

@fragment
fn fs_main(input: FragmentInput) -> @location(0) vec4<f32> {
    let light_color = uniforms.light_color.xyz;
    let ambient = AMBIENT_STRENGTH * light_color;

    let norm = normalize(input.normal);
    let light_direction = normalize(uniforms.light_position.xyz - input.fragment_position);
    let impact = max(dot(norm, light_direction), 0.0);
    let diffuse = impact * light_color;

    let view_direction = normalize(uniforms.view_position.xyz - input.fragment_position);
    let reflect_direction = reflect(-light_direction, norm);
    let specular_component = pow(max(dot(view_direction, reflect_direction), 0.0), HIGHLIGHT_SIZE);
    let specular = SPECULAR_INTENSITY * specular_component * light_color;

    let texture_color = textureSample(object_texture, object_sampler, input.uv * uniforms.uv_scale.xy);
    let phong = (ambient + diffuse + specular) * texture_color.xyz * uniforms.object_color.xyz;
    return vec4<f32>(phong, 1.0);
}
"#;

const LAMP_VERTEX: &str = r#"
struct LampUniforms {
    model: mat4x4<f32>,
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
}

@group(0) @binding(0)
var<uniform> lamp: LampUniforms;

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return lamp.projection * lamp.view * lamp.model * vec4<f32>(position, 1.0);
}
"#;

const LAMP_FRAGMENT: &str = r#"
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0);
}
"#;
