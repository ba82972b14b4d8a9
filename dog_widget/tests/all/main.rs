mod test_harness;
