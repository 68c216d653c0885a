use crate::utils::error::Result;

/// 上傳檔案的讀寫來源
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn top_n(&self) -> usize;
    fn output_format(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
}
