use tree_parity::Benchmark;

fn main() {
    env_logger::init();

    let mut bench = Benchmark::new();

    println!("{}", bench.run(10000, Some(580198)));
    println!("{}", bench.run(100000, Some(5801423)));
}
