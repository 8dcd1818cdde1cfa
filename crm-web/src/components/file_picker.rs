use js_sys::Uint8Array;
use shared::client::UploadFile;
use shared::models::DocumentInput;
use shared::{ApiError, CrmClient};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};
use yew::{AttrValue, Callback, Event, Html, Properties, TargetCast, function_component, html};

#[derive(Properties, PartialEq)]
pub struct FilePickerProps {
    pub label: AttrValue,
    pub on_select: Callback<Vec<File>>,
    #[prop_or_default]
    pub accept: Option<AttrValue>,
    #[prop_or_default]
    pub multiple: bool,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(FilePicker)]
pub fn file_picker(props: &FilePickerProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let Some(list) = input.files() else {
                return;
            };
            let files: Vec<File> = (0..list.length()).filter_map(|index| list.get(index)).collect();
            if !files.is_empty() {
                on_select.emit(files);
            }
            // Allow picking the same file again.
            input.set_value("");
        })
    };

    html! {
        <label class="form-control w-full">
            <div class="label">
                <span class="label-text">{ props.label.clone() }</span>
            </div>
            <input
                type="file"
                class="file-input file-input-bordered w-full"
                accept={props.accept.clone()}
                multiple={props.multiple}
                disabled={props.disabled}
                {onchange}
            />
        </label>
    }
}

/// Read a browser file into memory for a multipart upload.
pub async fn read_upload(file: &File) -> Result<UploadFile, ApiError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::new(format!("Could not read {}", file.name())))?;
    let mime_type = Some(file.type_()).filter(|mime| !mime.is_empty());
    Ok(UploadFile {
        name: file.name(),
        mime_type,
        bytes: Uint8Array::new(&buffer).to_vec(),
    })
}

/// Uploads each file and records it as a document, in one bulk call when
/// more than one file was picked. Returns how many documents were created.
pub async fn upload_documents(
    client: &CrmClient,
    files: Vec<File>,
    customer_id: Option<String>,
) -> Result<usize, ApiError> {
    let mut inputs = Vec::with_capacity(files.len());
    for file in &files {
        let uploaded = client.upload_document(read_upload(file).await?).await?;
        inputs.push(DocumentInput::from_upload(
            &uploaded,
            &file.name(),
            customer_id.clone(),
        ));
    }

    let created = inputs.len();
    match created {
        0 => Ok(0),
        1 => {
            let input = inputs.remove(0);
            client.create_document(&input).await.map(|_| 1)
        }
        _ => client.create_documents_bulk(inputs).await.map(|_| created),
    }
}
