/// 快照下载成功后的统计，仅用于日志展示。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotSummary {
    /// 实际下载的提交哈希（服务器未返回时为请求的 revision）
    pub revision_sha: String,
    pub files_total: usize,
    /// 本地已完整而跳过的文件数
    pub files_skipped: usize,
    pub files_downloaded: usize,
    pub bytes_downloaded: u64,
}
