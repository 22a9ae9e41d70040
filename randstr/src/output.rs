use crate::error::{Error, Result};
use crate::Config;
use log::{debug, info, warn};
use sha2::{Digest, Sha256};
use std::io::Write;
use std::path::Path;
use tera::{Context, Tera};

/// Name the secret is bound to inside templates.
pub const TEMPLATE_VAR: &str = "random_string";

const TEMPLATE_NAME: &str = "template";

/// Somewhere to put the final text. Failures are never fatal.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> anyhow::Result<()>;
}

/// The desktop clipboard via arboard, connected on each copy.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> anyhow::Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

pub fn sha256_hex(secret: &str) -> String {
    hex::encode(Sha256::digest(secret.as_bytes()))
}

pub fn render_template(path: &Path, secret: &str) -> Result<String> {
    let mut tera = Tera::default();
    tera.add_template_file(path, Some(TEMPLATE_NAME))
        .map_err(|e| Error::template(path, &e))?;
    let mut context = Context::new();
    context.insert(TEMPLATE_VAR, secret);
    let rendered = tera
        .render(TEMPLATE_NAME, &context)
        .map_err(|e| Error::template(path, &e))?;
    Ok(trim_trailing_newline(rendered))
}

/// Drop one line ending from the end of the file, the same as Jinja2 does
/// unless `keep_trailing_newline` is set.
fn trim_trailing_newline(mut text: String) -> String {
    if text.ends_with("\r\n") {
        text.truncate(text.len() - 2);
    } else if text.ends_with('\n') || text.ends_with('\r') {
        text.pop();
    }
    text
}

/// Print exactly one result for `secret` and, if asked, hand the same text
/// to the clipboard. Hash beats template, template beats plain.
///
/// Returns the text that was printed (minus any label).
pub fn dispatch(
    config: &Config,
    secret: &str,
    out: &mut impl Write,
    clipboard: &mut dyn Clipboard,
) -> Result<String> {
    let text = if config.hash_password {
        debug!("hashing generated string");
        let hashed = sha256_hex(secret);
        writeln!(out, "Generated (and Hashed) Random String (SHA256): {hashed}")?;
        hashed
    } else if let Some(path) = &config.template {
        debug!("rendering template {:?}", path);
        // render fully before printing anything
        let rendered = render_template(path, secret)?;
        writeln!(out, "{rendered}")?;
        rendered
    } else {
        writeln!(out, "Generated Random String: {secret}")?;
        secret.to_string()
    };
    out.flush()?;

    if config.copy {
        match clipboard.copy(&text) {
            Ok(()) => info!("string copied to clipboard"),
            Err(e) => warn!("unable to copy to clipboard: {e}. ensure a clipboard provider (xclip, xsel, wl-copy) is available"),
        }
    }
    Ok(text)
}
