// file_selection.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Case-insensitive extension check.
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

fn sorted_entries<F>(dir: &Path, keep: F) -> io::Result<Vec<PathBuf>>
where
    F: Fn(&Path) -> bool,
{
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| keep(path))
        .collect();
    // Plain lexicographic order by file name; this is the animation order.
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

pub fn select_gif_files(input_dir: &Path, gif_extension: &str) -> io::Result<Vec<PathBuf>> {
    let extensions = [gif_extension.to_string()];
    sorted_entries(input_dir, |path| {
        path.is_file() && has_extension(path, &extensions)
    })
}

pub fn select_subfolders(input_dir: &Path) -> io::Result<Vec<PathBuf>> {
    sorted_entries(input_dir, |path| path.is_dir())
}

pub fn select_images(folder: &Path, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    sorted_entries(folder, |path| path.is_file() && has_extension(path, extensions))
}

/// The `output` folder beside `input_dir`.
pub fn output_directory(input_dir: &Path, output_dir_name: &str) -> PathBuf {
    match input_dir.parent() {
        Some(parent) => parent.join(output_dir_name),
        None => input_dir.join(output_dir_name),
    }
}

pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, b"x").unwrap();
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths.iter().map(|p| file_name(p)).collect()
    }

    #[test]
    fn gif_selection_is_case_insensitive_and_files_only() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("b.GIF"));
        touch(&tmp.path().join("a.gif"));
        touch(&tmp.path().join("notes.txt"));
        fs::create_dir(tmp.path().join("dir.gif")).unwrap();

        let gifs = select_gif_files(tmp.path(), "gif").unwrap();
        assert_eq!(names(&gifs), vec!["a.gif", "b.GIF"]);
    }

    #[test]
    fn images_sort_lexicographically_not_numerically() {
        let tmp = TempDir::new().unwrap();
        for name in ["img10.png", "img2.JPG", "img1.jpeg", "skip.bmp"] {
            touch(&tmp.path().join(name));
        }
        let exts = vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()];
        let images = select_images(tmp.path(), &exts).unwrap();
        assert_eq!(names(&images), vec!["img1.jpeg", "img10.png", "img2.JPG"]);
    }

    #[test]
    fn subfolders_ignore_plain_files() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("dog")).unwrap();
        fs::create_dir(tmp.path().join("cat")).unwrap();
        touch(&tmp.path().join("readme.png"));
        assert_eq!(names(&select_subfolders(tmp.path()).unwrap()), vec!["cat", "dog"]);
    }

    #[test]
    fn output_directory_is_a_sibling() {
        assert_eq!(
            output_directory(Path::new("/data/gifs"), "output"),
            PathBuf::from("/data/output")
        );
        assert_eq!(output_directory(Path::new("gifs"), "output"), PathBuf::from("output"));
    }
}
