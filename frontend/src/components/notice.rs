use yew::prelude::*;

pub fn render_notice() -> Html {
    html! {
        <div class="ethics card">
            <h3>{"Important — Not medical advice"}</h3>
            <p>
                {"This tool is provided for awareness only. It uses a locally-run machine learning \
                  model to offer general recommendations. It is not a diagnosis. For skin concerns \
                  or medical issues, please consult a qualified healthcare professional."}
            </p>
        </div>
    }
}
