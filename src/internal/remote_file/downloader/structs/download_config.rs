use std::path::PathBuf;

/// 本次下载的配置。
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    pub save_path: Option<PathBuf>,
    /// 本地存在未完成的部分数据时，是否从断点继续；关闭则从零开始。
    pub resume: bool,
    /// 已知 LFS 摘要时，下载完成后是否校验 sha256。
    pub verify_checksum: bool,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            save_path: None,
            resume: true,
            verify_checksum: true,
        }
    }
}
