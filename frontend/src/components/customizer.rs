use log::info;
use serde::Serialize;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::motion::variants::SectionKind;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swatch {
    pub label: &'static str,
    pub hex: &'static str,
}

pub const COLORS: &[Swatch] = &[
    Swatch { label: "White", hex: "#FFFFFF" },
    Swatch { label: "Black", hex: "#000000" },
    Swatch { label: "Cyan", hex: "#00FFCC" },
    Swatch { label: "Blue", hex: "#3D5AFE" },
];

pub const MATERIALS: &[&str] = &["Aluminum", "Titanium", "Carbon Fiber"];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModuleConfig {
    pub color: &'static str,
    pub material: &'static str,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            color: COLORS[0].hex,
            material: MATERIALS[0],
        }
    }
}

impl ModuleConfig {
    pub fn with_color(&self, hex: &str) -> Self {
        match COLORS.iter().find(|swatch| swatch.hex.eq_ignore_ascii_case(hex)) {
            Some(swatch) => Self { color: swatch.hex, ..self.clone() },
            None => self.clone(),
        }
    }

    pub fn with_material(&self, material: &str) -> Self {
        match MATERIALS.iter().find(|known| **known == material) {
            Some(known) => Self { material: *known, ..self.clone() },
            None => self.clone(),
        }
    }

    pub fn preview_caption(&self) -> String {
        format!("Module Preview (Color: {}, Material: {})", self.color, self.material)
    }
}

#[function_component(CustomizationTool)]
pub fn customization_tool() -> Html {
    let config = use_state(ModuleConfig::default);
    let saved = use_state(|| false);

    let on_save = {
        let config = config.clone();
        let saved = saved.clone();
        Callback::from(move |_: MouseEvent| {
            let selection = serde_json::to_string(&*config).unwrap_or_default();
            info!("saved module configuration {}", selection);
            saved.set(true);
        })
    };

    let swatches = COLORS.iter().map(|swatch| {
        let selected = config.color == swatch.hex;
        let onclick = {
            let config = config.clone();
            let saved = saved.clone();
            let hex = swatch.hex;
            Callback::from(move |_: MouseEvent| {
                config.set(config.with_color(hex));
                saved.set(false);
            })
        };
        html! {
            <button
                class={classes!("swatch", selected.then(|| "selected"))}
                style={format!("background-color: {};", swatch.hex)}
                aria-pressed={selected.to_string()}
                {onclick}
            >
                <span class="sr-only">{ swatch.label }</span>
            </button>
        }
    });

    let materials = MATERIALS.iter().map(|material| {
        let selected = config.material == *material;
        let onclick = {
            let config = config.clone();
            let saved = saved.clone();
            let material = *material;
            Callback::from(move |_: MouseEvent| {
                config.set(config.with_material(material));
                saved.set(false);
            })
        };
        html! {
            <button class={classes!("pill", selected.then(|| "selected"))} aria-pressed={selected.to_string()} {onclick}>
                { *material }
            </button>
        }
    });

    html! {
        <Reveal kind={SectionKind::Feature} id="customizer" class="page-section customizer">
            <h2 class="section-title">{"Customize Your IWorld Device"}</h2>
            <div class="customizer-options">
                <h3>{"Color Options"}</h3>
                <div class="option-row">{ for swatches }</div>
                <h3>{"Material Selection"}</h3>
                <div class="option-row">{ for materials }</div>
            </div>
            <div class="module-preview">
                <span>{ config.preview_caption() }</span>
            </div>
            <div class="customizer-actions">
                {
                    if *saved {
                        html! { <span class="form-success">{"Configuration saved."}</span> }
                    } else {
                        html! {}
                    }
                }
                <button class="cta-button primary" onclick={on_save}>{"Save Configuration"}</button>
            </div>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_white_aluminum() {
        let config = ModuleConfig::default();
        assert_eq!(config.preview_caption(), "Module Preview (Color: #FFFFFF, Material: Aluminum)");
    }

    #[test]
    fn selection_only_accepts_known_options() {
        let config = ModuleConfig::default().with_color("#00ffcc").with_material("Titanium");
        assert_eq!(config.color, "#00FFCC");
        assert_eq!(config.material, "Titanium");

        let unchanged = config.with_color("#123456").with_material("Wood");
        assert_eq!(unchanged, config);
    }
}
