use yew::prelude::*;

use crate::components::customizer::CustomizationTool;

#[function_component(Customization)]
pub fn customization() -> Html {
    html! {
        <div class="page customization-page">
            <CustomizationTool />
            <style>
                {r#"
                .customizer {
                    padding-top: 8rem;
                }
                .customizer-options h3 {
                    margin-bottom: 1rem;
                }
                .option-row {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                    flex-wrap: wrap;
                }
                .swatch {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    border: 2px solid transparent;
                    cursor: pointer;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.4);
                    transition: transform 0.3s ease;
                }
                .swatch:hover {
                    transform: scale(1.1);
                }
                .swatch.selected {
                    border-color: var(--primary);
                }
                .pill {
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    border: 2px solid var(--secondary);
                    background: transparent;
                    color: var(--secondary);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .pill:hover,
                .pill.selected {
                    border-color: var(--primary);
                    color: var(--primary);
                }
                .module-preview {
                    position: relative;
                    height: 16rem;
                    border-radius: 1rem;
                    background-color: var(--muted);
                    background-image:
                        linear-gradient(rgba(0, 255, 204, 0.05) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(0, 255, 204, 0.05) 1px, transparent 1px);
                    background-size: 60px 60px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.25rem;
                    font-weight: bold;
                    text-align: center;
                    padding: 1rem;
                }
                .customizer-actions {
                    display: flex;
                    justify-content: flex-end;
                    align-items: center;
                    gap: 1rem;
                }
                "#}
            </style>
        </div>
    }
}
