use lanebuf::{sum_column_with_threads, NativeBuffer, NumberColumn};
use memmap::MmapOptions;
use std::{io::Write, time::Instant};

fn main() {
    let begin = Instant::now();
    let file_name = std::env::args()
        .nth(1)
        .unwrap_or("./numbers.txt".to_string());
    let file = std::fs::File::open(file_name).unwrap();
    // SAFETY: the mapping is only sound while nothing truncates or rewrites
    // the file underneath us; we trust the input to stay put for the run.
    let mmap = unsafe { MmapOptions::new().map(&file).unwrap() };
    let column = NumberColumn::new(&mmap[..]);
    let num_threads = std::thread::available_parallelism()
        .map(usize::from)
        .unwrap_or(1);
    let total = sum_column_with_threads::<NativeBuffer>(column, num_threads);
    let mut writer = std::io::stdout().lock();
    let _ = writeln!(&mut writer, "{total}");
    let _ = writeln!(&mut writer, "Took {:?}", begin.elapsed());
    let _ = writer.flush();
}
