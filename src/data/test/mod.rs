mod scoreboard;
