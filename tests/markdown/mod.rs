mod blocks;
mod escaping;
mod property;
