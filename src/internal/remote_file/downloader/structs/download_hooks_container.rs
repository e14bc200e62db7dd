use crate::internal::remote_file::downloader::traits::download::{DownloadHook, HookAbort};
use crate::internal::remote_file::structs::remote_file_data::RemoteFileData;

use super::download_result::DownloadResult;

/// 钩子容器：按注册顺序依次执行多个钩子。
#[derive(Default)]
pub struct DownloadHooksContainer {
    hooks: Vec<Box<dyn DownloadHook>>,
}

impl DownloadHooksContainer {
    /// 添加一个下载钩子；支持多次调用以注册多个钩子，按添加顺序依次执行。
    pub fn add(&mut self, hook: impl DownloadHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// 添加已装箱的钩子（由钩子工厂按文件生成时使用）。
    pub fn add_boxed(&mut self, hook: Box<dyn DownloadHook>) {
        self.hooks.push(hook);
    }

    pub async fn run_before_start(
        &mut self,
        file: &RemoteFileData,
        resume_from: u64,
    ) -> Result<(), HookAbort> {
        for h in self.hooks.iter_mut() {
            h.before_start(file, resume_from).await?;
        }
        Ok(())
    }

    pub fn run_on_chunk(&mut self, chunk: &[u8]) {
        for h in self.hooks.iter_mut() {
            h.on_chunk(chunk);
        }
    }

    pub fn run_on_progress(
        &mut self,
        bytes_done: u64,
        total: Option<u64>,
    ) {
        for h in self.hooks.iter_mut() {
            h.on_progress(bytes_done, total);
        }
    }

    pub async fn run_after_complete(&mut self, result: &DownloadResult) {
        for h in self.hooks.iter_mut() {
            h.after_complete(result).await;
        }
    }
}
