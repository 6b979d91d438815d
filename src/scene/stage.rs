use std::collections::BTreeMap;

use crate::animation::value::{Property, Value};
use crate::foundation::core::{ElementId, Rgba};

/// What an element is for. Decorative roles are created by the card builder; `ParticleHolder`,
/// `Particle` and `Flash` are ephemeral elements owned by a running effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A card: the visual container effects are played on.
    Container,
    /// Temporary node grouping the particles of one entrance.
    ParticleHolder,
    /// One burst particle.
    Particle,
    /// Full-card flash overlay used by the featured entrance.
    Flash,
    /// Decorative rain drop.
    RainDrop,
    /// Decorative snow flake.
    SnowFlake,
    /// Decorative sun disc.
    Sun,
    /// Decorative sun ray.
    SunRay,
}

/// Animatable style of one element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Style {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Horizontal offset from the layout position, in pixels.
    pub x: f64,
    /// Vertical offset from the layout position, in pixels.
    pub y: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Blur filter radius in pixels.
    pub blur: f64,
    /// Glow (box-shadow) radius in pixels.
    pub glow_radius: f64,
    /// Glow (box-shadow) color.
    pub glow_color: Rgba,
    /// Resolved theme (background) color; tints particles and glows.
    pub theme: Rgba,
    /// Element edge length in pixels; zero means "laid out by the caller".
    pub size: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            blur: 0.0,
            glow_radius: 0.0,
            glow_color: Rgba::TRANSPARENT,
            theme: Rgba::WHITE,
            size: 0.0,
        }
    }
}

impl Style {
    /// Read one property.
    pub fn get(&self, prop: Property) -> Value {
        match prop {
            Property::Opacity => Value::Scalar(self.opacity),
            Property::Scale => Value::Scalar(self.scale),
            Property::X => Value::Scalar(self.x),
            Property::Y => Value::Scalar(self.y),
            Property::Rotation => Value::Scalar(self.rotation),
            Property::Blur => Value::Scalar(self.blur),
            Property::GlowRadius => Value::Scalar(self.glow_radius),
            Property::GlowColor => Value::Color(self.glow_color),
        }
    }

    /// Write one property. Returns `false` on a scalar/color kind mismatch.
    pub fn set(&mut self, prop: Property, value: Value) -> bool {
        match (prop, value) {
            (Property::GlowColor, Value::Color(c)) => self.glow_color = c,
            (Property::GlowColor, Value::Scalar(_)) | (_, Value::Color(_)) => return false,
            (Property::Opacity, Value::Scalar(v)) => self.opacity = v,
            (Property::Scale, Value::Scalar(v)) => self.scale = v,
            (Property::X, Value::Scalar(v)) => self.x = v,
            (Property::Y, Value::Scalar(v)) => self.y = v,
            (Property::Rotation, Value::Scalar(v)) => self.rotation = v,
            (Property::Blur, Value::Scalar(v)) => self.blur = v,
            (Property::GlowRadius, Value::Scalar(v)) => self.glow_radius = v,
        }
        true
    }
}

/// One node of the stage tree.
#[derive(Clone, Debug)]
pub struct Element {
    /// Element handle.
    pub id: ElementId,
    /// Element role.
    pub role: Role,
    /// Parent node, `None` for containers.
    pub parent: Option<ElementId>,
    /// Children in insertion order.
    pub children: Vec<ElementId>,
    /// Current style.
    pub style: Style,
}

/// Read/write access to element properties, the seam the scheduler writes through.
pub trait PropertyStore {
    /// Current value of `prop` on `id`, or `None` when the element is not attached.
    fn get_property(&self, id: ElementId, prop: Property) -> Option<Value>;

    /// Write `prop` on `id`. Returns `false` when the element is not attached or the value kind
    /// does not match the property.
    fn set_property(&mut self, id: ElementId, prop: Property, value: Value) -> bool;
}

/// Serializable view of an element subtree, used for frame traces.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ElementSnapshot {
    /// Element handle.
    pub id: ElementId,
    /// Element role.
    pub role: Role,
    /// Style at snapshot time.
    pub style: Style,
    /// Child snapshots.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementSnapshot>,
}

/// In-memory element tree that stands in for the host UI's node tree.
#[derive(Debug, Default)]
pub struct Stage {
    elements: BTreeMap<ElementId, Element>,
    next_id: u64,
}

impl Stage {
    /// Empty stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a top-level card container tinted with `theme`.
    pub fn create_container(&mut self, theme: Rgba) -> ElementId {
        let style = Style {
            theme,
            ..Style::default()
        };
        self.insert(Role::Container, None, style)
    }

    /// Append a child to `parent`. Returns `None` when `parent` is not attached.
    pub fn add_child(&mut self, parent: ElementId, role: Role, style: Style) -> Option<ElementId> {
        if !self.contains(parent) {
            return None;
        }
        let id = self.insert(role, Some(parent), style);
        if let Some(p) = self.elements.get_mut(&parent) {
            p.children.push(id);
        }
        Some(id)
    }

    /// Append a decorative child with a default style.
    pub fn add_decoration(&mut self, container: ElementId, role: Role) -> Option<ElementId> {
        self.add_child(container, role, Style::default())
    }

    fn insert(&mut self, role: Role, parent: Option<ElementId>, style: Style) -> ElementId {
        self.next_id += 1;
        let id = ElementId(self.next_id);
        self.elements.insert(
            id,
            Element {
                id,
                role,
                parent,
                children: Vec::new(),
                style,
            },
        );
        id
    }

    /// Remove `id` and its whole subtree. Returns `false` if it was not attached.
    pub fn detach(&mut self, id: ElementId) -> bool {
        let Some(el) = self.elements.remove(&id) else {
            return false;
        };
        if let Some(parent) = el.parent.and_then(|p| self.elements.get_mut(&p)) {
            parent.children.retain(|&c| c != id);
        }
        let mut stack = el.children;
        while let Some(c) = stack.pop() {
            if let Some(child) = self.elements.remove(&c) {
                stack.extend(child.children);
            }
        }
        true
    }

    /// Whether `id` is attached.
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Whether `id` is attached and is a card container.
    pub fn is_container(&self, id: ElementId) -> bool {
        self.get(id).is_some_and(|el| el.role == Role::Container)
    }

    /// Element by handle.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Current style of `id`.
    pub fn style(&self, id: ElementId) -> Option<&Style> {
        self.get(id).map(|el| &el.style)
    }

    /// Mutable style of `id`.
    pub fn style_mut(&mut self, id: ElementId) -> Option<&mut Style> {
        self.elements.get_mut(&id).map(|el| &mut el.style)
    }

    /// Direct children of `id` (empty when detached).
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map(|el| el.children.as_slice()).unwrap_or(&[])
    }

    /// Direct children of `id` with the given role, in insertion order.
    pub fn children_with_role(&self, id: ElementId, role: Role) -> Vec<ElementId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|c| self.get(*c).is_some_and(|el| el.role == role))
            .collect()
    }

    /// Number of attached elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the stage has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Snapshot the subtree rooted at `id`.
    pub fn snapshot(&self, id: ElementId) -> Option<ElementSnapshot> {
        let el = self.get(id)?;
        Some(ElementSnapshot {
            id: el.id,
            role: el.role,
            style: el.style,
            children: el
                .children
                .iter()
                .filter_map(|c| self.snapshot(*c))
                .collect(),
        })
    }
}

impl PropertyStore for Stage {
    fn get_property(&self, id: ElementId, prop: Property) -> Option<Value> {
        self.style(id).map(|s| s.get(prop))
    }

    fn set_property(&mut self, id: ElementId, prop: Property, value: Value) -> bool {
        self.style_mut(id).is_some_and(|s| s.set(prop, value))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/stage.rs"]
mod tests;
