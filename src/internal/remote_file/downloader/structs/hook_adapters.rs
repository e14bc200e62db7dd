//! 闭包适配器：`with_xx_hook` 传入的闭包经由这里成为 [`DownloadHook`]。
//!
//! 闭包返回的 future 需要 `'static`，因此只传入可复制或已克隆的值。

use std::future::Future;

use async_trait::async_trait;

use crate::remote_file::download::{DownloadHook, HookAbort};
use crate::remote_file::{DownloadResult, RemoteFileData};

/// 开始前：参数为续传起点
pub(crate) struct BeforeStartHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F, Fut> DownloadHook for BeforeStartHookAdapter<F>
where
    F: FnMut(u64) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), HookAbort>> + Send + 'static,
{
    async fn before_start(
        &mut self,
        _file: &RemoteFileData,
        resume_from: u64,
    ) -> Result<(), HookAbort> {
        (self.0)(resume_from).await
    }
}

pub(crate) struct OnProgressHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F> DownloadHook for OnProgressHookAdapter<F>
where
    F: FnMut(u64, Option<u64>) + Send + Sync + 'static,
{
    fn on_progress(&mut self, bytes_done: u64, total: Option<u64>) {
        (self.0)(bytes_done, total);
    }
}

/// 完成后：参数为本次结果的副本
pub(crate) struct AfterCompleteHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F, Fut> DownloadHook for AfterCompleteHookAdapter<F>
where
    F: FnMut(DownloadResult) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn after_complete(&mut self, result: &DownloadResult) {
        (self.0)(result.clone()).await
    }
}
