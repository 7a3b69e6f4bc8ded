//! Archive Adapter - ZIP 压缩包写出实现

mod zip_bundler;

pub use zip_bundler::ZipBundler;
