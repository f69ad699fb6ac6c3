use event_session::PreviewEntry;
use payloads::requests::PhotoUpload;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// The active preview list, as derived by the edit session.
    pub previews: Vec<PreviewEntry>,
    /// Called with the replacement selection, in selection order. A new
    /// selection always replaces the previous one wholesale.
    pub on_select: Callback<Vec<PhotoUpload>>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Photo selection area: hidden multi-file input plus a preview grid.
/// Only image MIME types are offered by the picker (`accept` attribute);
/// files are read to bytes here so the rest of the app never touches a
/// raw `File` handle.
#[function_component]
pub fn EventPhotoPicker(props: &Props) -> Html {
    let on_change = {
        let on_select = props.on_select.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(files) = input.files() else {
                return;
            };
            if files.length() == 0 {
                return;
            }

            let on_select = on_select.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let mut uploads =
                    Vec::with_capacity(files.length() as usize);
                // Sequential reads keep selection order in the upload list.
                for i in 0..files.length() {
                    let Some(file) = files.get(i) else {
                        continue;
                    };
                    let buffer =
                        match JsFuture::from(file.array_buffer()).await {
                            Ok(buffer) => buffer,
                            Err(_) => {
                                tracing::error!(
                                    "failed to read selected file {}",
                                    file.name()
                                );
                                return;
                            }
                        };
                    let data = js_sys::Uint8Array::new(&buffer).to_vec();
                    uploads.push(PhotoUpload {
                        file_name: file.name(),
                        content_type: file.type_(),
                        data,
                    });
                }
                on_select.emit(uploads);
            });
        })
    };

    html! {
        <div>
            <label class="block text-sm font-medium text-neutral-700 \
                          dark:text-neutral-300 mb-1">
                {"Photos"}
            </label>
            <input
                id="photo-upload"
                type="file"
                accept="image/*"
                multiple=true
                onchange={on_change}
                class="hidden"
                disabled={props.disabled}
            />
            <label
                for="photo-upload"
                class="bg-neutral-100 dark:bg-neutral-700 min-h-40 flex \
                       flex-wrap gap-2 p-2 rounded-md cursor-pointer \
                       overflow-y-auto border-2 border-dashed \
                       border-neutral-300 dark:border-neutral-600 \
                       hover:border-neutral-400 dark:hover:border-neutral-500 \
                       transition-colors"
            >
                {if props.previews.is_empty() {
                    html! {
                        <p class="text-sm text-neutral-500 \
                                  dark:text-neutral-400 m-auto">
                            {"Click to select photos"}
                        </p>
                    }
                } else {
                    html! {
                        <>
                            {for props.previews.iter().map(|preview| html! {
                                <img
                                    key={preview.display_url.clone()}
                                    src={preview.display_url.clone()}
                                    alt="Preview"
                                    class="w-32 h-20 object-cover rounded \
                                           border border-neutral-300 \
                                           dark:border-neutral-600"
                                />
                            })}
                        </>
                    }
                }}
            </label>
            <p class="text-xs text-neutral-500 mt-1">
                {"Selecting new photos replaces all existing ones."}
            </p>
        </div>
    }
}
