mod max_array_length_scenarios;
