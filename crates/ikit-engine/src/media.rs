//! Media downloads into the host media directory.
//!
//! Media is strictly optional: any download failure skips the
//! corresponding note field rather than failing the note.

use std::path::{Path, PathBuf};

use chrono::Local;
use ikit::ImmersionKitClient;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;

/// Media download engine.
#[derive(Debug)]
pub struct MediaEngine<'a> {
    client: &'a ImmersionKitClient,
}

impl<'a> MediaEngine<'a> {
    pub(crate) fn new(client: &'a ImmersionKitClient) -> Self {
        Self { client }
    }

    /// Download a media resource into `dest_dir`.
    ///
    /// Filenames combine a timestamp with a short random suffix, so
    /// concurrent jobs never collide. The body is streamed to a `.part`
    /// file and renamed into place once complete; a returned path always
    /// refers to a fully written, non-empty file.
    ///
    /// Every download failure (non-success status, connection failure,
    /// interrupted stream, empty body) yields `Ok(None)`. Only local
    /// filesystem errors are hard, since they indicate a misconfigured
    /// media directory.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use std::path::Path;
    /// # use ikit_engine::Engine;
    /// # async fn example() -> ikit_engine::Result<()> {
    /// let engine = Engine::new();
    /// let url = engine.client().media().audio_url("some_example_id");
    ///
    /// match engine.media().fetch(&url, Path::new("/tmp"), "mp3").await? {
    ///     Some(path) => println!("saved {}", path.display()),
    ///     None => println!("no audio for this example"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch(
        &self,
        url: &str,
        dest_dir: &Path,
        extension: &str,
    ) -> Result<Option<PathBuf>> {
        let mut response = match self.client.media().download(url).await {
            Ok(Some(response)) => response,
            Ok(None) => {
                debug!(url, "media not available; skipping");
                return Ok(None);
            }
            Err(e) => {
                debug!(url, error = %e, "media download failed; skipping");
                return Ok(None);
            }
        };

        let file_name = unique_file_name(extension);
        let final_path = dest_dir.join(&file_name);
        let part_path = dest_dir.join(format!("{file_name}.part"));

        let mut file = fs::File::create(&part_path).await?;
        let mut written: u64 = 0;
        loop {
            match response.chunk().await {
                Ok(Some(chunk)) => {
                    file.write_all(&chunk).await?;
                    written += chunk.len() as u64;
                }
                Ok(None) => break,
                Err(e) => {
                    debug!(url, error = %e, "media stream interrupted; skipping");
                    drop(file);
                    let _ = fs::remove_file(&part_path).await;
                    return Ok(None);
                }
            }
        }
        file.flush().await?;
        drop(file);

        if written == 0 {
            debug!(url, "media body was empty; skipping");
            let _ = fs::remove_file(&part_path).await;
            return Ok(None);
        }

        fs::rename(&part_path, &final_path).await?;
        Ok(Some(final_path))
    }
}

/// `YYYYmmddHHMMSS_<suffix>.<extension>`, unique per call.
fn unique_file_name(extension: &str) -> String {
    let stamp = Local::now().format("%Y%m%d%H%M%S");
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{stamp}_{}.{extension}", &suffix[..8])
}
