use scene::{LightId, LightKind, Material, MaterialId, ObjectId, Scene};

/// Value written through a panel control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlValue {
    Number(f64),
    Bool(bool),
}

/// Numeric range of a control. Writes are clamped to `[min, max]` and
/// snapped to multiples of `step` from `min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ControlRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn validate(&self, value: f64) -> f64 {
        let snapped = if self.step > 0.0 {
            self.min + ((value - self.min) / self.step).round() * self.step
        } else {
            value
        };
        snapped.clamp(self.min, self.max)
    }
}

/// Numeric material fields the demos expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialField {
    Metalness,
    Roughness,
    Clearcoat,
    ClearcoatRoughness,
    Sheen,
    SheenRoughness,
    Transmission,
    Ior,
    Thickness,
}

/// Light fields the demos expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightField {
    Visible,
    Intensity,
    PositionX,
    PositionY,
    PositionZ,
    Angle,
    Penumbra,
    Decay,
}

/// What a control writes into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamTarget {
    Material {
        material: MaterialId,
        field: MaterialField,
    },
    Light {
        light: LightId,
        field: LightField,
    },
    ObjectVisible {
        object: ObjectId,
    },
}

/// A registered tunable parameter: target, field, and validation range.
#[derive(Debug, Clone)]
pub struct ControlBinding {
    pub label: String,
    pub target: ParamTarget,
    /// `None` for boolean controls.
    pub range: Option<ControlRange>,
}

/// Binding registry the host panel renders controls from.
///
/// The panel writes validated values straight into the target field; the
/// driver never polls the panel, it simply re-reads object state on the next
/// tick, so a write is visible within one frame.
#[derive(Debug, Default)]
pub struct PanelRegistry {
    bindings: Vec<ControlBinding>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_control(
        &mut self,
        label: impl Into<String>,
        target: ParamTarget,
        range: Option<ControlRange>,
    ) {
        self.bindings.push(ControlBinding {
            label: label.into(),
            target,
            range,
        });
    }

    pub fn bindings(&self) -> &[ControlBinding] {
        &self.bindings
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Write `value` through binding `index`, clamping and snapping numeric
    /// values first. Writes to targets that no longer exist are dropped with
    /// a log line rather than surfaced as errors.
    pub fn set(&self, scene: &mut Scene, index: usize, value: ControlValue) {
        let Some(binding) = self.bindings.get(index) else {
            tracing::warn!(index, "panel write to unknown control");
            return;
        };
        let value = match (value, binding.range) {
            (ControlValue::Number(v), Some(range)) => ControlValue::Number(range.validate(v)),
            (value, _) => value,
        };
        apply(scene, binding, value);
    }

    /// Current value of binding `index`, read back from the scene.
    pub fn get(&self, scene: &Scene, index: usize) -> Option<ControlValue> {
        let binding = self.bindings.get(index)?;
        read(scene, binding)
    }
}

fn apply(scene: &mut Scene, binding: &ControlBinding, value: ControlValue) {
    match (binding.target, value) {
        (ParamTarget::Material { material, field }, ControlValue::Number(v)) => {
            if let Some(mat) = scene.material_mut(material) {
                write_material_field(mat, field, v as f32);
            }
        }
        (ParamTarget::Light { light, field }, value) => {
            if let Some(light) = scene.light_mut(light) {
                write_light_field(light, field, value);
            }
        }
        (ParamTarget::ObjectVisible { object }, ControlValue::Bool(v)) => {
            if let Some(object) = scene.object_mut(object) {
                object.visible = v;
            }
        }
        (target, value) => {
            tracing::warn!(?target, ?value, "panel write with mismatched value kind");
        }
    }
}

fn write_material_field(material: &mut Material, field: MaterialField, v: f32) {
    // Metalness/roughness live on the standard core; the rest are physical-only.
    match (material, field) {
        (Material::Standard(m), MaterialField::Metalness) => m.metalness = v,
        (Material::Standard(m), MaterialField::Roughness) => m.roughness = v,
        (Material::Physical(m), field) => match field {
            MaterialField::Metalness => m.standard.metalness = v,
            MaterialField::Roughness => m.standard.roughness = v,
            MaterialField::Clearcoat => m.clearcoat = v,
            MaterialField::ClearcoatRoughness => m.clearcoat_roughness = v,
            MaterialField::Sheen => m.sheen = v,
            MaterialField::SheenRoughness => m.sheen_roughness = v,
            MaterialField::Transmission => m.transmission = v,
            MaterialField::Ior => m.ior = v,
            MaterialField::Thickness => m.thickness = v,
        },
        (material, field) => {
            tracing::warn!(?field, ?material, "panel write to field this material lacks");
        }
    }
}

fn write_light_field(light: &mut scene::Light, field: LightField, value: ControlValue) {
    match (field, value) {
        (LightField::Visible, ControlValue::Bool(v)) => light.visible = v,
        (LightField::Intensity, ControlValue::Number(v)) => light.intensity = v as f32,
        (LightField::PositionX, ControlValue::Number(v)) => light.position.x = v as f32,
        (LightField::PositionY, ControlValue::Number(v)) => light.position.y = v as f32,
        (LightField::PositionZ, ControlValue::Number(v)) => light.position.z = v as f32,
        (LightField::Angle, ControlValue::Number(v)) => {
            if let LightKind::Spot { angle, .. } = &mut light.kind {
                *angle = v as f32;
            }
        }
        (LightField::Penumbra, ControlValue::Number(v)) => {
            if let LightKind::Spot { penumbra, .. } = &mut light.kind {
                *penumbra = v as f32;
            }
        }
        (LightField::Decay, ControlValue::Number(v)) => match &mut light.kind {
            LightKind::Spot { decay, .. } | LightKind::Point { decay, .. } => *decay = v as f32,
            _ => {}
        },
        (field, value) => {
            tracing::warn!(?field, ?value, "panel write with mismatched value kind");
        }
    }
}

fn read(scene: &Scene, binding: &ControlBinding) -> Option<ControlValue> {
    match binding.target {
        ParamTarget::Material { material, field } => {
            let mat = scene.material(material)?;
            let v = match (mat, field) {
                (Material::Standard(m), MaterialField::Metalness) => m.metalness,
                (Material::Standard(m), MaterialField::Roughness) => m.roughness,
                (Material::Physical(m), field) => match field {
                    MaterialField::Metalness => m.standard.metalness,
                    MaterialField::Roughness => m.standard.roughness,
                    MaterialField::Clearcoat => m.clearcoat,
                    MaterialField::ClearcoatRoughness => m.clearcoat_roughness,
                    MaterialField::Sheen => m.sheen,
                    MaterialField::SheenRoughness => m.sheen_roughness,
                    MaterialField::Transmission => m.transmission,
                    MaterialField::Ior => m.ior,
                    MaterialField::Thickness => m.thickness,
                },
                _ => return None,
            };
            Some(ControlValue::Number(f64::from(v)))
        }
        ParamTarget::Light { light, field } => {
            let light = scene.light(light)?;
            let value = match field {
                LightField::Visible => return Some(ControlValue::Bool(light.visible)),
                LightField::Intensity => light.intensity,
                LightField::PositionX => light.position.x,
                LightField::PositionY => light.position.y,
                LightField::PositionZ => light.position.z,
                LightField::Angle => match &light.kind {
                    LightKind::Spot { angle, .. } => *angle,
                    _ => return None,
                },
                LightField::Penumbra => match &light.kind {
                    LightKind::Spot { penumbra, .. } => *penumbra,
                    _ => return None,
                },
                LightField::Decay => match &light.kind {
                    LightKind::Spot { decay, .. } | LightKind::Point { decay, .. } => *decay,
                    _ => return None,
                },
            };
            Some(ControlValue::Number(f64::from(value)))
        }
        ParamTarget::ObjectVisible { object } => {
            Some(ControlValue::Bool(scene.object(object)?.visible))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_clamps_and_snaps() {
        let range = ControlRange::new(0.0, 1.0, 0.1);
        assert!((range.validate(0.26) - 0.3).abs() < 1e-9);
        assert_eq!(range.validate(5.0), 1.0);
        assert_eq!(range.validate(-3.0), 0.0);
    }

    #[test]
    fn zero_step_only_clamps() {
        let range = ControlRange::new(1.0, 2.0, 0.0);
        assert_eq!(range.validate(1.2345), 1.2345);
        assert_eq!(range.validate(9.0), 2.0);
    }
}
