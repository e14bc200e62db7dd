use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};

use crate::internal::remote_file::downloader::structs::DownloadResult;
use crate::internal::remote_file::downloader::traits::download::{DownloadHook, HookAbort};
use crate::internal::remote_file::structs::remote_file_data::RemoteFileData;

const BAR_TEMPLATE: &str =
    "{msg:30!} [{bar:40.cyan/blue}] {bytes}/{total_bytes} {bytes_per_sec} {eta}";

/// 单个文件的终端进度条
pub struct ProgressBarHook {
    bar: ProgressBar,
    name: String,
}

impl ProgressBarHook {
    pub fn new(file: &RemoteFileData) -> Self {
        let bar = ProgressBar::new(file.size.unwrap_or(0));
        bar.set_style(
            ProgressStyle::with_template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        Self::with_bar(bar, file)
    }

    /// 使用给定的进度条，测试里传 `ProgressBar::hidden()`
    pub fn with_bar(bar: ProgressBar, file: &RemoteFileData) -> Self {
        bar.set_message(file.relative_path.clone());
        Self {
            bar,
            name: file.relative_path.clone(),
        }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

#[async_trait]
impl DownloadHook for ProgressBarHook {
    async fn before_start(
        &mut self,
        file: &RemoteFileData,
        resume_from: u64,
    ) -> Result<(), HookAbort> {
        if let Some(size) = file.size {
            self.bar.set_length(size);
        }
        self.bar.set_position(resume_from);
        Ok(())
    }

    fn on_progress(&mut self, bytes_done: u64, total: Option<u64>) {
        if let Some(total) = total {
            self.bar.set_length(total);
        }
        self.bar.set_position(bytes_done);
    }

    async fn after_complete(&mut self, result: &DownloadResult) {
        match result {
            DownloadResult::AlreadyComplete => {
                self.bar.finish_with_message(format!("{} (已存在)", self.name))
            }
            DownloadResult::Saved { .. } => self.bar.finish(),
        }
    }
}

impl Drop for ProgressBarHook {
    fn drop(&mut self) {
        // 下载出错时进度条停在原处
        if !self.bar.is_finished() {
            self.bar.abandon();
        }
    }
}
