//! 输入装载
//!
//! 一次性读入全部输入字节；文件句柄在仿真开始前即已释放。
//! 读取失败在任何仿真器运行之前交还给调用方。

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 输入文件读取失败
#[derive(Debug, Error)]
#[error("cannot open file {}: {source}", .path.display())]
pub struct LoadError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// 读取整个输入文件作为待分帧的载荷。
pub fn read_payload(path: &Path) -> Result<Vec<u8>, LoadError> {
    fs::read(path).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })
}
